//! Canned suggestions: other card sites, image "analysis", and Google
//! image-search links.

mod google;
mod image;
mod sites;

pub use google::{
    google_image_search, GoogleImageSearch, GoogleImageSearchRequest, GoogleSearchUrls,
    DEFAULT_IMAGE_QUERY, POKEMON_SEARCH_TERMS,
};
pub use image::{
    analyze_image, analyze_image_with, ImageAnalysis, ImageAnalysisRequest, PokemonSearches,
    CARD_NAME_POOL, MAX_CONFIDENCE, MIN_CONFIDENCE, SUGGESTION_COUNT,
};
pub use sites::{site_suggestions, SiteSuggestion, DEFAULT_WEB_QUERY, WEB_SEARCH_MESSAGE};

use serde::{Deserialize, Serialize};

use crate::links::encode_path_segment;

const GOOGLE_LENS: &str = "https://lens.google.com/";
const GOOGLE_IMAGES: &str = "https://images.google.com/";

/// Tips shown next to visual-search links.
pub const SEARCH_TIPS: [&str; 5] = [
    "Use Google Lens for the most accurate visual matching",
    "Try searching with card name + \"TCG\" for specific results",
    "Include set name (Base Set, Jungle, etc.) for precise matches",
    "Search for card number if visible on the card",
    "Try \"holographic\" or \"shadowless\" for special variants",
];

/// Reverse image search entry points, aimed at an image URL when one is known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSearchLinks {
    pub google_lens: String,
    pub search_by_image: String,
    pub manual_upload: String,
}

impl ImageSearchLinks {
    pub fn for_image(image_url: Option<&str>) -> Self {
        let (google_lens, search_by_image) = match image_url.filter(|u| !u.is_empty()) {
            Some(url) => {
                let encoded = encode_path_segment(url);
                (
                    format!("https://lens.google.com/uploadbyurl?url={}", encoded),
                    format!(
                        "https://www.google.com/searchbyimage?image_url={}",
                        encoded
                    ),
                )
            }
            None => (GOOGLE_LENS.to_string(), GOOGLE_IMAGES.to_string()),
        };

        Self {
            google_lens,
            search_by_image,
            manual_upload: GOOGLE_IMAGES.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_without_image() {
        let links = ImageSearchLinks::for_image(None);
        assert_eq!(links.google_lens, "https://lens.google.com/");
        assert_eq!(links.search_by_image, "https://images.google.com/");

        assert_eq!(ImageSearchLinks::for_image(Some("")), links);
    }

    #[test]
    fn test_links_with_image() {
        let links = ImageSearchLinks::for_image(Some("http://x.test/a b.jpg"));
        assert_eq!(
            links.search_by_image,
            "https://www.google.com/searchbyimage?image_url=http%3A//x.test/a%20b.jpg"
        );
    }
}
