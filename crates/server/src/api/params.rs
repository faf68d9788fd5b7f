//! Query string access that tolerates repeated keys.

use axum::extract::Query;

/// Every `key=value` pair of the query string, in order.
pub type QueryPairs = Query<Vec<(String, String)>>;

/// First value given for `key`, like a form parser's `getfirst`.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_wins() {
        let p = pairs(&[("page", "2"), ("q", "Mew"), ("q", "Pikachu")]);
        assert_eq!(first_value(&p, "q"), Some("Mew"));
        assert_eq!(first_value(&p, "page"), Some("2"));
        assert_eq!(first_value(&p, "missing"), None);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let p = pairs(&[("q", ""), ("q", "Mew")]);
        assert_eq!(first_value(&p, "q"), Some(""));
    }
}
