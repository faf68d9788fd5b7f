//! Card set API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use cardscout_core::{list_sets, CardSet, SetCard};
use serde::Serialize;

use super::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SetsResponse {
    pub sets: Vec<CardSet>,
}

#[derive(Debug, Serialize)]
pub struct SetCardsResponse {
    #[serde(rename = "setName")]
    pub set_name: String,
    pub cards: Vec<SetCard>,
}

/// GET /api/sets
///
/// The built-in list of card sets.
pub async fn list_card_sets(State(state): State<Arc<AppState>>) -> Json<SetsResponse> {
    Json(SetsResponse {
        sets: list_sets(state.links()),
    })
}

/// GET /api/search-set/{set_name}
///
/// Cards the wiki files under the set's card category.
pub async fn search_set(
    State(state): State<Arc<AppState>>,
    Path(set_name): Path<String>,
) -> Result<Json<SetCardsResponse>, ApiError> {
    let cards = state
        .search()
        .set_cards(&set_name)
        .await
        .map_err(|e| ApiError::upstream("Failed to search set", e))?;

    Ok(Json(SetCardsResponse { set_name, cards }))
}
