use serde::{Deserialize, Serialize};

use super::{ImageSearchLinks, SEARCH_TIPS};

pub const DEFAULT_IMAGE_QUERY: &str = "pokemon card tcg";

/// Popular terms offered as one-click image searches.
pub const POKEMON_SEARCH_TERMS: [&str; 6] = [
    "pokemon card base set",
    "pokemon tcg vintage",
    "pokemon card holographic",
    "pokemon trading card game",
    "pokemon card collection",
    "pokemon tcg expansion",
];

const GOOGLE_SEARCH_MESSAGE: &str = "Google Image Search options for Pokemon card identification";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleImageSearchRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
}

impl GoogleImageSearchRequest {
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    fn query(&self) -> &str {
        self.search_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_IMAGE_QUERY)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleSearchUrls {
    pub google_lens: String,
    pub search_by_image: String,
    pub contextual_search: String,
    pub pokemon_card_search: String,
    pub tcg_search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleImageSearch {
    pub search_urls: GoogleSearchUrls,
    pub search_tips: Vec<String>,
    pub pokemon_search_terms: Vec<String>,
    pub message: String,
}

/// Build Google image-search links for a raw request body.
pub fn google_image_search(body: &[u8]) -> GoogleImageSearch {
    let request = GoogleImageSearchRequest::from_body(body);
    let reverse = ImageSearchLinks::for_image(request.image_url.as_deref());
    let query = urlencoding::encode(request.query());

    GoogleImageSearch {
        search_urls: GoogleSearchUrls {
            google_lens: reverse.google_lens,
            search_by_image: reverse.search_by_image,
            contextual_search: format!(
                "https://www.google.com/search?q=pokemon+card+tcg+{}&tbm=isch",
                query
            ),
            pokemon_card_search: format!(
                "https://www.google.com/search?q=%22pokemon+card%22+{}&tbm=isch",
                query
            ),
            tcg_search: format!(
                "https://www.google.com/search?q=pokemon+tcg+{}&tbm=isch",
                query
            ),
        },
        search_tips: SEARCH_TIPS.iter().map(|t| t.to_string()).collect(),
        pokemon_search_terms: POKEMON_SEARCH_TERMS.iter().map(|t| t.to_string()).collect(),
        message: GOOGLE_SEARCH_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_body() {
        let result = google_image_search(b"");
        assert_eq!(result.search_urls.google_lens, "https://lens.google.com/");
        assert_eq!(
            result.search_urls.tcg_search,
            "https://www.google.com/search?q=pokemon+tcg+pokemon%20card%20tcg&tbm=isch"
        );
        assert_eq!(result.search_tips.len(), 5);
        assert_eq!(result.pokemon_search_terms.len(), 6);
    }

    #[test]
    fn test_query_and_image_url() {
        let body = br#"{"search_query": "Blastoise", "image_url": "https://i.test/b.png"}"#;
        let result = google_image_search(body);
        assert_eq!(
            result.search_urls.contextual_search,
            "https://www.google.com/search?q=pokemon+card+tcg+Blastoise&tbm=isch"
        );
        assert_eq!(
            result.search_urls.pokemon_card_search,
            "https://www.google.com/search?q=%22pokemon+card%22+Blastoise&tbm=isch"
        );
        assert!(result
            .search_urls
            .google_lens
            .starts_with("https://lens.google.com/uploadbyurl?url=https%3A//i.test"));
    }

    #[test]
    fn test_empty_query_uses_default() {
        let result = google_image_search(br#"{"search_query": ""}"#);
        assert!(result.search_urls.tcg_search.contains("pokemon%20card%20tcg"));
    }
}
