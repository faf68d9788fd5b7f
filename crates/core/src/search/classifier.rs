//! TCG relevance check for search hits.

/// Title fragments that mark a trading-card article.
const TITLE_MARKERS: [&str; 5] = ["TCG", "(Base Set)", "(Jungle)", "(Fossil)", "(Team Rocket)"];

/// Snippet fragments that mark a trading-card article.
const SNIPPET_MARKERS: [&str; 2] = ["card", "TCG"];

/// Whether a hit looks like a trading-card article.
///
/// Plain case-sensitive substring matching: "Trading Card" does not count
/// as "card".
pub fn is_tcg(title: &str, snippet: &str) -> bool {
    TITLE_MARKERS.iter().any(|m| title.contains(m))
        || SNIPPET_MARKERS.iter().any(|m| snippet.contains(m))
}
