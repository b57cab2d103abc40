mod engine;
mod search_result;

pub use engine::{SearchConfig, SearchEngine};
pub use search_result::SearchResult;
