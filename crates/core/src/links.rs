//! Wiki article URL derivation.

use crate::config::WikiConfig;

/// Percent-encode a path segment the way the wiki expects article titles.
///
/// Everything outside the unreserved set is escaped except `/`, which
/// MediaWiki uses for subpages and leaves literal in article paths.
pub fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).replace("%2F", "/")
}

/// Builds article URLs under a fixed wiki page prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLinks {
    page_prefix: String,
}

impl WikiLinks {
    pub fn new(page_prefix: impl Into<String>) -> Self {
        Self {
            page_prefix: page_prefix.into(),
        }
    }

    pub fn from_config(config: &WikiConfig) -> Self {
        Self::new(config.page_url_prefix())
    }

    pub fn page_prefix(&self) -> &str {
        &self.page_prefix
    }

    /// URL of an article, given its title as returned by the search API.
    ///
    /// Spaces become underscores before encoding, matching wiki page names.
    pub fn article(&self, title: &str) -> String {
        format!(
            "{}{}",
            self.page_prefix,
            encode_path_segment(&title.replace(' ', "_"))
        )
    }

    /// URL of a card set's TCG article.
    ///
    /// The set title gets a " (TCG)" suffix and is encoded with its spaces
    /// intact; the wiki redirects the %20 form to the canonical page.
    pub fn card_set(&self, set_title: &str) -> String {
        format!(
            "{}{}",
            self.page_prefix,
            encode_path_segment(&format!("{} (TCG)", set_title))
        )
    }
}

impl Default for WikiLinks {
    fn default() -> Self {
        Self::from_config(&WikiConfig::default())
    }
}
