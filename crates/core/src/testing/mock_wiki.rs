//! Mock wiki backend for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::wiki::{CategoryMember, SearchHit, WikiError, WikiSearch};

/// A recorded wiki call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedWikiQuery {
    Search { query: String, limit: u32 },
    CategoryMembers { category: String, limit: u32 },
}

/// Mock implementation of the WikiSearch trait.
///
/// Provides controllable behavior for testing:
/// - Return scripted hits per exact query string (unknown queries return nothing)
/// - Track queries for assertions
/// - Simulate failures, either on the next call or on a specific query
///
/// # Example
///
/// ```rust,ignore
/// use cardscout_core::testing::{MockWikiSearch, fixtures};
///
/// let wiki = MockWikiSearch::new();
/// wiki.set_hits("Pikachu TCG", vec![fixtures::hit("Pikachu (Base Set 58)", "card")]).await;
///
/// let hits = wiki.search("Pikachu TCG", 20).await?;
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockWikiSearch {
    /// Search hits by exact query.
    hits: Arc<RwLock<HashMap<String, Vec<SearchHit>>>>,
    /// Category members by category title.
    members: Arc<RwLock<HashMap<String, Vec<CategoryMember>>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedWikiQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<WikiError>>>,
    /// Errors armed for a specific search query or category, used once.
    query_errors: Arc<RwLock<HashMap<String, WikiError>>>,
}

impl Default for MockWikiSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWikiSearch {
    /// Create a new empty mock wiki.
    pub fn new() -> Self {
        Self {
            hits: Arc::new(RwLock::new(HashMap::new())),
            members: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            query_errors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Script the hits returned for an exact search query.
    pub async fn set_hits(&self, query: &str, hits: Vec<SearchHit>) {
        self.hits.write().await.insert(query.to_string(), hits);
    }

    /// Script the members returned for a category title.
    pub async fn set_category_members(&self, category: &str, members: Vec<CategoryMember>) {
        self.members
            .write()
            .await
            .insert(category.to_string(), members);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedWikiQuery> {
        self.queries.read().await.clone()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: WikiError) {
        *self.next_error.write().await = Some(error);
    }

    /// Configure the next call for `query` (search query or category) to fail.
    pub async fn fail_query(&self, query: &str, error: WikiError) {
        self.query_errors
            .write()
            .await
            .insert(query.to_string(), error);
    }

    async fn take_error(&self, key: &str) -> Option<WikiError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Some(err);
        }
        self.query_errors.write().await.remove(key)
    }

    async fn record(&self, query: RecordedWikiQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl WikiSearch for MockWikiSearch {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, WikiError> {
        self.record(RecordedWikiQuery::Search {
            query: query.to_string(),
            limit,
        })
        .await;

        if let Some(err) = self.take_error(query).await {
            return Err(err);
        }

        Ok(self
            .hits
            .read()
            .await
            .get(query)
            .map(|hits| hits.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn category_members(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<CategoryMember>, WikiError> {
        self.record(RecordedWikiQuery::CategoryMembers {
            category: category.to_string(),
            limit,
        })
        .await;

        if let Some(err) = self.take_error(category).await {
            return Err(err);
        }

        Ok(self
            .members
            .read()
            .await
            .get(category)
            .map(|members| members.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_scripted_hits_respect_limit() {
        let wiki = MockWikiSearch::new();
        let hits = (0..5).map(|i| fixtures::hit(&format!("Hit {}", i), "")).collect();
        wiki.set_hits("q", hits).await;

        assert_eq!(wiki.search("q", 3).await.unwrap().len(), 3);
        assert!(wiki.search("other", 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let wiki = MockWikiSearch::new();
        wiki.set_next_error(WikiError::ParseError("boom".to_string()))
            .await;

        assert!(wiki.search("q", 10).await.is_err());
        assert!(wiki.search("q", 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_query_error_only_hits_that_query() {
        let wiki = MockWikiSearch::new();
        wiki.fail_query("bad", WikiError::ParseError("boom".to_string()))
            .await;

        assert!(wiki.search("good", 10).await.is_ok());
        assert!(wiki.search("bad", 10).await.is_err());
        assert!(wiki.search("bad", 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_records_failed_calls_too() {
        let wiki = MockWikiSearch::new();
        wiki.set_next_error(WikiError::ParseError("boom".to_string()))
            .await;

        wiki.category_members("Category:Fossil cards", 100).await.ok();

        assert_eq!(
            wiki.recorded_queries().await,
            vec![RecordedWikiQuery::CategoryMembers {
                category: "Category:Fossil cards".to_string(),
                limit: 100,
            }]
        );
    }
}
