use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{catalog, handlers, search, suggestions};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        // Wiki search
        .route("/search", get(search::search_cards))
        // Card sets
        .route("/sets", get(catalog::list_card_sets))
        .route("/search-set/{set_name}", get(catalog::search_set))
        // Suggestions
        .route("/web-search", get(suggestions::web_search))
        // Uploads are not size-capped
        .route(
            "/analyze-image",
            post(suggestions::analyze_image).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/google-image-search",
            post(suggestions::google_image_search).layer(DefaultBodyLimit::disable()),
        )
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api_routes)
        .method_not_allowed_fallback(handlers::not_found)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
