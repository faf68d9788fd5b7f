//! Testing utilities and mock implementations.
//!
//! The mock wiki lets the search service and the HTTP layer be exercised
//! without reaching Bulbapedia.
//!
//! # Example
//!
//! ```rust,ignore
//! use cardscout_core::testing::{MockWikiSearch, fixtures};
//!
//! let wiki = MockWikiSearch::new();
//! wiki.set_hits("Mew TCG", vec![fixtures::hit("Mew (Wizards Promo 8)", "card")]).await;
//!
//! // Use behind Arc<dyn WikiSearch>...
//! ```

mod mock_wiki;

pub use mock_wiki::{MockWikiSearch, RecordedWikiQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::wiki::{CategoryMember, SearchHit};

    /// Create a search hit with a size derived from the title.
    pub fn hit(title: &str, snippet: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            snippet: snippet.to_string(),
            size: 1000 + title.len() as u64,
        }
    }

    /// Create a category member.
    pub fn member(page_id: u64, title: &str) -> CategoryMember {
        CategoryMember {
            page_id,
            title: title.to_string(),
        }
    }
}
