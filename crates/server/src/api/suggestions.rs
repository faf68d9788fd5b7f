//! Suggestion API handlers: other sites, image analysis, Google image search.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    Json,
};
use cardscout_core::{
    analyze_image as run_image_analysis, google_image_search as build_google_links,
    site_suggestions, GoogleImageSearch, ImageAnalysis, SiteSuggestion, DEFAULT_WEB_QUERY,
    WEB_SEARCH_MESSAGE,
};
use serde::Serialize;
use tracing::debug;

use super::error::ApiError;
use super::params::{first_value, QueryPairs};

#[derive(Debug, Serialize)]
pub struct WebSearchResponse {
    pub query: String,
    pub suggestions: Vec<SiteSuggestion>,
    pub message: String,
}

/// GET /api/web-search?q=
///
/// Links for searching other card sites. An unreadable query string is
/// treated like a missing `q`.
pub async fn web_search(params: Result<QueryPairs, QueryRejection>) -> Json<WebSearchResponse> {
    let pairs = params.map(|Query(pairs)| pairs).unwrap_or_default();
    let query = first_value(&pairs, "q")
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_WEB_QUERY)
        .to_string();

    Json(WebSearchResponse {
        suggestions: site_suggestions(&query),
        query,
        message: WEB_SEARCH_MESSAGE.to_string(),
    })
}

/// POST /api/analyze-image
///
/// Placeholder analysis; the uploaded bytes are never decoded.
pub async fn analyze_image(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ImageAnalysis>, ApiError> {
    let body = body?;
    debug!("Image analysis request ({} bytes)", body.len());
    Ok(Json(run_image_analysis(&body)))
}

/// POST /api/google-image-search
///
/// Google visual-search links for a card image or query.
pub async fn google_image_search(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GoogleImageSearch>, ApiError> {
    Ok(Json(build_google_links(&body?)))
}
