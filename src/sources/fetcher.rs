use reqwest::blocking::Client;
use url::Url;

use crate::errors::FeederResult;
use crate::sources::traits::FeedFetcher;

/// Fetches feeds with a single blocking GET.
///
/// The response status is not checked: whatever body the server returns is
/// handed to the parser. Non-success statuses are only logged.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FeederResult<Vec<u8>> {
        let url = Url::parse(url)?;
        tracing::debug!(url = %url, "Fetching feed");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Feed returned non-success status");
        }

        let bytes = response.bytes()?;
        tracing::debug!(url = %url, status = %status, bytes = bytes.len(), "Fetched feed");

        Ok(bytes.to_vec())
    }
}
