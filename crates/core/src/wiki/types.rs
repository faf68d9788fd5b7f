//! Types for MediaWiki API responses.

use serde::{Deserialize, Serialize};

/// One full-text search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    /// Article title.
    pub title: String,
    /// Highlighted excerpt; contains `<span class="searchmatch">` markup.
    #[serde(default)]
    pub snippet: String,
    /// Article size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// One page listed in a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMember {
    /// Page ID.
    #[serde(rename = "pageid")]
    pub page_id: u64,
    /// Page title.
    pub title: String,
}

// ============================================================================
// Raw API envelopes (internal)
// ============================================================================

/// `action=query` response. Both lists are absent when the wiki has nothing
/// to report, so every level defaults to empty.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub query: Option<QueryBody>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryBody {
    #[serde(default)]
    pub search: Vec<SearchHit>,
    #[serde(default)]
    pub categorymembers: Vec<CategoryMember>,
}

impl QueryResponse {
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.query.map(|q| q.search).unwrap_or_default()
    }

    pub fn into_members(self) -> Vec<CategoryMember> {
        self.query.map(|q| q.categorymembers).unwrap_or_default()
    }
}
