use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Fetch,
    Parse,
    Serialize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Config => "Error reading config file:",
            Stage::Fetch => "Error fetching RSS feed:",
            Stage::Parse => "Error parsing RSS feed:",
            Stage::Serialize => "Error converting to JSON:",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum FeederError {
    // Configuration errors
    #[error("{0}")]
    Config(String),

    #[error("{}: {}", path.display(), source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    ConfigParse(#[source] serde_json::Error),

    // Network errors
    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    // Parsing errors
    #[error("{0}")]
    Parse(#[from] quick_xml::Error),

    #[error("no <channel> element in document")]
    MissingChannel,

    // Output errors
    #[error("{0}")]
    Serialize(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeederError {
    /// Stage to report the failure under.
    pub fn stage(&self) -> Stage {
        match self {
            FeederError::Config(_)
            | FeederError::ConfigRead { .. }
            | FeederError::ConfigParse(_) => Stage::Config,
            FeederError::InvalidUrl(_) | FeederError::Fetch(_) => Stage::Fetch,
            FeederError::Parse(_) | FeederError::MissingChannel => Stage::Parse,
            FeederError::Serialize(_) | FeederError::Io(_) => Stage::Serialize,
        }
    }

    /// One-line diagnostic with the stage prefix, as printed by the binary.
    pub fn report(&self) -> String {
        format!("{} {}", self.stage(), self)
    }
}

pub type FeederResult<T> = Result<T, FeederError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_reports_config_stage() {
        let err = FeederError::ConfigRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(err.stage(), Stage::Config);
        assert_eq!(err.report(), "Error reading config file: missing.json: not found");
    }

    #[test]
    fn test_invalid_url_reports_fetch_stage() {
        let err: FeederError = url::Url::parse("").unwrap_err().into();
        assert_eq!(err.stage(), Stage::Fetch);
        assert!(err.report().starts_with("Error fetching RSS feed: invalid feed URL"));
    }
}
