//! Built-in list of Pokemon TCG expansions for browsing.

use serde::{Deserialize, Serialize};

use crate::links::WikiLinks;

/// (title, description) for each browsable set, oldest first.
pub const CARD_SETS: [(&str, &str); 20] = [
    ("Base Set", "The original Pokemon TCG set (1998)"),
    ("Jungle", "Second expansion with jungle Pokemon"),
    ("Fossil", "Third expansion with fossil Pokemon"),
    ("Team Rocket", "Dark Pokemon and Team Rocket cards"),
    ("Gym Heroes", "Gym Leader Pokemon cards"),
    ("Gym Challenge", "More Gym Leader Pokemon"),
    ("Neo Genesis", "First set with Generation II Pokemon"),
    ("Neo Discovery", "Second Neo series set"),
    ("Neo Destiny", "Third Neo series set"),
    ("Expedition Base Set", "E-Card series begins"),
    ("Aquapolis", "E-Card series water Pokemon"),
    ("Skyridge", "Final E-Card series set"),
    ("Ruby & Sapphire", "Generation III Pokemon debut"),
    ("Sandstorm", "Desert-themed Pokemon set"),
    ("Dragon", "Dragon-type Pokemon introduction"),
    ("Team Magma vs Team Aqua", "Hoenn villains clash"),
    ("Hidden Legends", "Legendary Pokemon focus"),
    ("FireRed & LeafGreen", "Kanto remakes tie-in"),
    ("Deoxys", "Mythical Pokemon Deoxys"),
    ("Emerald", "Emerald version tie-in"),
];

/// A browsable card set with its wiki link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardSet {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// All card sets, in catalog order.
pub fn list_sets(links: &WikiLinks) -> Vec<CardSet> {
    CARD_SETS
        .iter()
        .map(|(title, description)| CardSet {
            title: title.to_string(),
            description: description.to_string(),
            url: links.card_set(title),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sets_is_stable() {
        let links = WikiLinks::default();
        let first = list_sets(&links);
        let second = list_sets(&links);

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
        assert_eq!(first[0].title, "Base Set");
        assert_eq!(first[19].title, "Emerald");
    }

    #[test]
    fn test_set_urls() {
        let sets = list_sets(&WikiLinks::default());
        for set in &sets {
            let expected = format!(
                "https://bulbapedia.bulbagarden.net/wiki/{}",
                urlencoding::encode(&format!("{} (TCG)", set.title))
            );
            assert_eq!(set.url, expected);
        }

        let ruby = sets.iter().find(|s| s.title == "Ruby & Sapphire").unwrap();
        assert_eq!(
            ruby.url,
            "https://bulbapedia.bulbagarden.net/wiki/Ruby%20%26%20Sapphire%20%28TCG%29"
        );
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<&str> = CARD_SETS.iter().map(|(t, _)| *t).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), CARD_SETS.len());
    }
}
