pub mod output;
pub mod pipeline;

pub use output::write_json;
pub use pipeline::FeedPipeline;
