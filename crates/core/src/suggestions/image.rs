//! Placeholder card "recognition" for uploaded images.
//!
//! Nothing looks at the image. The response suggests a few well-known card
//! names at random and points the user at Google's visual search instead.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ImageSearchLinks, SEARCH_TIPS};

/// Names suggested for an uploaded image.
pub const CARD_NAME_POOL: [&str; 13] = [
    "Pikachu",
    "Charizard",
    "Blastoise",
    "Venusaur",
    "Mewtwo",
    "Mew",
    "Lugia",
    "Ho-oh",
    "Rayquaza",
    "Arceus",
    "Base Set",
    "Jungle",
    "Fossil",
];

pub const SUGGESTION_COUNT: usize = 3;

/// Bounds of the reported confidence.
pub const MIN_CONFIDENCE: f64 = 0.7;
pub const MAX_CONFIDENCE: f64 = 0.8;

const DETECTED_TEXT: &str =
    "Image uploaded! Use Google Image Search for the best card identification.";

const ANALYSIS_MESSAGE: &str =
    "Use Google Image Search links for the best Pokemon card identification results.";

/// Optional fields of an analysis request. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageAnalysisRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_data: Option<String>,
}

impl ImageAnalysisRequest {
    /// Parse a request body, treating anything unparseable as empty.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Canned Google image searches for Pokemon cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokemonSearches {
    pub pokemon_cards: String,
    pub tcg_search: String,
    pub base_set: String,
    pub vintage_cards: String,
}

impl Default for PokemonSearches {
    fn default() -> Self {
        Self {
            pokemon_cards: "https://www.google.com/search?q=pokemon+card+tcg&tbm=isch".to_string(),
            tcg_search: "https://www.google.com/search?q=pokemon+tcg+trading+card&tbm=isch"
                .to_string(),
            base_set: "https://www.google.com/search?q=pokemon+base+set+cards&tbm=isch"
                .to_string(),
            vintage_cards:
                "https://www.google.com/search?q=pokemon+vintage+cards+holographic&tbm=isch"
                    .to_string(),
        }
    }
}

/// Result of a (placeholder) image analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageAnalysis {
    pub detected_text: String,
    pub confidence: f64,
    pub suggestions: Vec<String>,
    pub google_search_urls: ImageSearchLinks,
    pub pokemon_searches: PokemonSearches,
    pub search_tips: Vec<String>,
    pub message: String,
}

/// Analyze a raw request body using the thread-local RNG.
pub fn analyze_image(body: &[u8]) -> ImageAnalysis {
    analyze_image_with(body, &mut rand::thread_rng())
}

/// Analyze a raw request body with a caller-supplied RNG.
pub fn analyze_image_with<R: Rng + ?Sized>(body: &[u8], rng: &mut R) -> ImageAnalysis {
    let request = ImageAnalysisRequest::from_body(body);

    let suggestions = CARD_NAME_POOL
        .choose_multiple(rng, SUGGESTION_COUNT)
        .map(|name| name.to_string())
        .collect();

    ImageAnalysis {
        detected_text: DETECTED_TEXT.to_string(),
        confidence: rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE),
        suggestions,
        google_search_urls: ImageSearchLinks::for_image(request.image_url.as_deref()),
        pokemon_searches: PokemonSearches::default(),
        search_tips: SEARCH_TIPS.iter().map(|t| t.to_string()).collect(),
        message: ANALYSIS_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_hundred_analyses_stay_in_bounds() {
        for _ in 0..100 {
            let analysis = analyze_image(b"");
            assert_eq!(analysis.suggestions.len(), SUGGESTION_COUNT);

            let distinct: HashSet<&String> = analysis.suggestions.iter().collect();
            assert_eq!(distinct.len(), SUGGESTION_COUNT);

            for name in &analysis.suggestions {
                assert!(CARD_NAME_POOL.contains(&name.as_str()), "unexpected {}", name);
            }
            assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&analysis.confidence));
        }
    }

    #[test]
    fn test_body_content_does_not_matter() {
        let bodies: [&[u8]; 4] = [
            b"",
            b"not json at all",
            br#"{"image_data": "data:image/png;base64,AAAA"}"#,
            &[0xff, 0xd8, 0xff, 0xe0],
        ];
        for body in bodies {
            let mut rng = StdRng::seed_from_u64(7);
            let analysis = analyze_image_with(body, &mut rng);

            let mut reference_rng = StdRng::seed_from_u64(7);
            let reference = analyze_image_with(b"", &mut reference_rng);
            assert_eq!(analysis, reference);
        }
    }

    #[test]
    fn test_image_url_feeds_google_links() {
        let body = br#"{"image_url": "https://example.com/card.png"}"#;
        let analysis = analyze_image(body);
        assert_eq!(
            analysis.google_search_urls.google_lens,
            "https://lens.google.com/uploadbyurl?url=https%3A//example.com/card.png"
        );
        assert_eq!(
            analysis.google_search_urls.manual_upload,
            "https://images.google.com/"
        );
    }

    #[test]
    fn test_sampling_covers_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(analyze_image_with(b"", &mut rng).suggestions);
        }
        assert_eq!(seen.len(), CARD_NAME_POOL.len());
    }

    #[test]
    fn test_from_body_tolerates_garbage() {
        let request = ImageAnalysisRequest::from_body(b"{");
        assert!(request.image_url.is_none());
        assert!(request.image_data.is_none());

        let request = ImageAnalysisRequest::from_body(br#"{"image_url": "u", "extra": 1}"#);
        assert_eq!(request.image_url.as_deref(), Some("u"));
    }
}
