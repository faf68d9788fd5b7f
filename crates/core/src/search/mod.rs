//! Card search: TCG relevance classification and the wiki query cascade.

mod classifier;
mod service;
mod types;

pub use classifier::is_tcg;
pub use service::CardSearchService;
pub use types::{SearchResult, SetCard};
