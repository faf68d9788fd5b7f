//! Card search API handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use cardscout_core::SearchResult;
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use super::params::{first_value, QueryPairs};
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    #[serde(rename = "totalFound")]
    pub total_found: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/search?q=
///
/// Search the wiki for cards. A repeated `q` uses its first value.
pub async fn search_cards(
    State(state): State<Arc<AppState>>,
    params: Result<QueryPairs, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(pairs) = params?;
    let query = match first_value(&pairs, "q") {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(ApiError::BadRequest("Search query is required".to_string())),
    };

    let results = state
        .search()
        .search(&query)
        .await
        .map_err(|e| ApiError::upstream("Failed to search Bulbapedia", e))?;

    info!("Search '{}' returned {} results", query, results.len());

    Ok(Json(SearchResponse {
        total_found: results.len(),
        query,
        results,
    }))
}
