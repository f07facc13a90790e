pub mod feed;
pub mod record;

pub use feed::{Channel, Item, Rss};
pub use record::{project, OutputFormat, OutputRecord};
