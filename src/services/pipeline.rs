use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::domain::{project, OutputFormat};
use crate::errors::FeederResult;
use crate::services::output::write_json;
use crate::sources::{parse_items, FeedFetcher};

/// Config -> fetch -> parse -> project -> print.
///
/// Each stage returns on the first error, so a failed run writes nothing.
pub struct FeedPipeline<F: FeedFetcher> {
    fetcher: F,
}

impl<F: FeedFetcher> FeedPipeline<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn run<W: Write>(
        &self,
        config_path: &Path,
        format: OutputFormat,
        writer: W,
    ) -> FeederResult<()> {
        let config = Config::load(config_path)?;
        let body = self.fetcher.fetch(&config.url)?;
        let items = parse_items(&body)?;

        match format {
            OutputFormat::Projected => write_json(writer, &project(items)),
            OutputFormat::Raw => write_json(writer, &items),
        }
    }
}
