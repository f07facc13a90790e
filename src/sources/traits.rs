use crate::errors::FeederResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher {
    /// Fetch the raw body served at `url`
    fn fetch(&self, url: &str) -> FeederResult<Vec<u8>>;
}
