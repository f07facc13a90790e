use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{FeederError, FeederResult};

/// File name used by the `Literal` location.
pub const LITERAL_CONFIG_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Feed URL. Left empty when the key is absent.
    #[serde(default)]
    pub url: String,
}

impl Config {
    pub fn load(path: &Path) -> FeederResult<Self> {
        let file = File::open(path).map_err(|source| FeederError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), url = %config.url, "Loaded config");

        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> FeederResult<Self> {
        serde_json::from_reader(reader).map_err(FeederError::ConfigParse)
    }
}

/// Where to look for the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigLocation {
    Explicit(PathBuf),
    /// `<executable stem>.json`, next to the executable or in the working directory.
    #[default]
    ExecutableName,
    /// `config.json` in the working directory.
    Literal,
}

impl ConfigLocation {
    /// Get the path of the running executable
    fn current_exe() -> FeederResult<PathBuf> {
        std::env::current_exe()
            .map_err(|e| FeederError::Config(format!("cannot determine executable name: {}", e)))
    }

    pub fn resolve(&self) -> FeederResult<PathBuf> {
        match self {
            ConfigLocation::Explicit(path) => Ok(path.clone()),
            ConfigLocation::Literal => Ok(PathBuf::from(LITERAL_CONFIG_NAME)),
            ConfigLocation::ExecutableName => {
                let exe = Self::current_exe()?;
                let file_name = config_name_for(&exe).ok_or_else(|| {
                    FeederError::Config(format!("cannot derive config name from {}", exe.display()))
                })?;

                // Prefer the executable's directory, fall back to the working directory
                if let Some(dir) = exe.parent() {
                    let beside_exe = dir.join(&file_name);
                    if beside_exe.exists() {
                        return Ok(beside_exe);
                    }
                }

                Ok(PathBuf::from(file_name))
            }
        }
    }
}

/// Replace the executable's extension with `.json`: `rss2json.exe` -> `rss2json.json`.
pub fn config_name_for(executable: &Path) -> Option<String> {
    let stem = executable.file_stem()?.to_str()?;
    Some(format!("{}.json", stem))
}
