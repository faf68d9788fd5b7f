pub mod catalog;
pub mod config;
pub mod links;
pub mod search;
pub mod suggestions;
pub mod testing;
pub mod wiki;

pub use catalog::{list_sets, CardSet, CARD_SETS};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config,
    ConfigError, ServerConfig, WikiConfig,
};
pub use links::WikiLinks;
pub use search::{is_tcg, CardSearchService, SearchResult, SetCard};
pub use suggestions::{
    analyze_image, google_image_search, site_suggestions, GoogleImageSearch, ImageAnalysis,
    SiteSuggestion, DEFAULT_WEB_QUERY, WEB_SEARCH_MESSAGE,
};
pub use wiki::{CategoryMember, MediaWikiClient, SearchHit, WikiError, WikiSearch};
