use serde::{Deserialize, Serialize};

/// A search hit shaped for the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    /// Wiki excerpt, markup kept as returned.
    pub snippet: String,
    pub url: String,
    /// Article size in bytes.
    pub size: u64,
    #[serde(rename = "isTCG")]
    pub is_tcg: bool,
}

/// One card listed under a set's card category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetCard {
    pub title: String,
    pub url: String,
    /// Wiki page ID.
    pub id: u64,
    pub set: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_field_names() {
        let result = SearchResult {
            title: "Mew".to_string(),
            snippet: String::new(),
            url: "u".to_string(),
            size: 10,
            is_tcg: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isTCG"], true);
        assert!(json.get("is_tcg").is_none());
        assert_eq!(json["size"], 10);
    }
}
