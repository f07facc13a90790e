pub mod fetcher;
pub mod rss;
pub mod traits;

pub use fetcher::HttpFetcher;
pub use rss::{parse_feed, parse_items};
pub use traits::FeedFetcher;

#[cfg(test)]
pub use traits::MockFeedFetcher;
