use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigLocation;
use crate::domain::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rss2json")]
#[command(about = "Fetch an RSS feed and print its items as JSON")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to <executable name>.json)
    #[arg(short, long, env = "FEEDER_CONFIG", conflicts_with = "literal_config")]
    pub config: Option<PathBuf>,

    /// Read config.json from the working directory
    #[arg(long)]
    pub literal_config: bool,

    /// Output shape: projected (lowercase keys, guid omitted when empty) or raw
    #[arg(short, long, default_value = "projected")]
    pub format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config_location(&self) -> ConfigLocation {
        match (&self.config, self.literal_config) {
            (Some(path), _) => ConfigLocation::Explicit(path.clone()),
            (None, true) => ConfigLocation::Literal,
            (None, false) => ConfigLocation::ExecutableName,
        }
    }
}
