//! Upstream wiki integration.
//!
//! Bulbapedia runs MediaWiki, so card lookups go through the standard
//! `action=query` API: full-text search (`list=search`) and category
//! listings (`list=categorymembers`).

mod client;
mod types;

pub use client::MediaWikiClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the wiki API.
#[derive(Debug, Error)]
pub enum WikiError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client could not be built from its configuration.
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Read-only access to the wiki's query API.
#[async_trait]
pub trait WikiSearch: Send + Sync {
    /// Full-text search, returning at most `limit` hits in wiki rank order.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, WikiError>;

    /// List the pages of a category (title including the `Category:` prefix).
    async fn category_members(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<CategoryMember>, WikiError>;
}
