//! Links to other Pokemon card sites.

use serde::{Deserialize, Serialize};

/// Query used when the caller gives none.
pub const DEFAULT_WEB_QUERY: &str = "Pokemon cards";

pub const WEB_SEARCH_MESSAGE: &str = "External search suggestions for Pokemon card resources";

/// A link to search another site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSuggestion {
    pub site: String,
    pub url: String,
    pub description: String,
}

impl SiteSuggestion {
    fn new(site: &str, url: String, description: &str) -> Self {
        Self {
            site: site.to_string(),
            url,
            description: description.to_string(),
        }
    }
}

/// The five external sites, with `query` embedded where the site supports it.
pub fn site_suggestions(query: &str) -> Vec<SiteSuggestion> {
    let encoded = urlencoding::encode(query);
    vec![
        SiteSuggestion::new(
            "TCGPlayer",
            format!("https://www.tcgplayer.com/search/pokemon?q={}", encoded),
            "Buy and sell Pokemon cards with price tracking",
        ),
        SiteSuggestion::new(
            "Pokemon TCG Database",
            "https://pokemontcg.io/".to_string(),
            "Complete Pokemon TCG card database with API",
        ),
        SiteSuggestion::new(
            "Serebii TCG",
            "https://www.serebii.net/card/".to_string(),
            "Comprehensive Pokemon card information and sets",
        ),
        SiteSuggestion::new(
            "Pokemon Official",
            "https://www.pokemon.com/us/pokemon-tcg/".to_string(),
            "Official Pokemon Trading Card Game website",
        ),
        SiteSuggestion::new(
            "Pokellector",
            format!("https://www.pokellector.com/search?q={}", encoded),
            "Pokemon card collection tracker and database",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_suggestions_in_order() {
        let sites: Vec<String> = site_suggestions("Pikachu")
            .into_iter()
            .map(|s| s.site)
            .collect();
        assert_eq!(
            sites,
            vec![
                "TCGPlayer",
                "Pokemon TCG Database",
                "Serebii TCG",
                "Pokemon Official",
                "Pokellector"
            ]
        );
    }

    #[test]
    fn test_query_embedded_in_search_sites() {
        let suggestions = site_suggestions("Pikachu");
        assert_eq!(
            suggestions[0].url,
            "https://www.tcgplayer.com/search/pokemon?q=Pikachu"
        );
        assert_eq!(
            suggestions[4].url,
            "https://www.pokellector.com/search?q=Pikachu"
        );
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let suggestions = site_suggestions("Dark Charizard & co");
        assert_eq!(
            suggestions[0].url,
            "https://www.tcgplayer.com/search/pokemon?q=Dark%20Charizard%20%26%20co"
        );
    }

    #[test]
    fn test_constant_sites_ignore_query() {
        let a = site_suggestions("Mew");
        let b = site_suggestions(DEFAULT_WEB_QUERY);
        for i in 1..4 {
            assert_eq!(a[i], b[i]);
        }
    }
}
