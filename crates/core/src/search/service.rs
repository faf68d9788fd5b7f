//! Card search over the wiki.

use std::sync::Arc;

use tracing::{debug, info};

use super::classifier::is_tcg;
use super::types::{SearchResult, SetCard};
use crate::links::WikiLinks;
use crate::wiki::{WikiError, WikiSearch};

/// Suffix that biases the wiki's ranking toward card articles.
const TCG_SUFFIX: &str = " TCG";

/// Hits requested for the TCG-biased query, and how many of them are kept.
const PRIMARY_LIMIT: u32 = 20;
const PRIMARY_KEEP: usize = 15;

/// Hits requested for the plain fallback query, and how many are kept.
const FALLBACK_LIMIT: u32 = 15;
const FALLBACK_KEEP: usize = 10;

/// Upper bound on cards listed for a set category.
const SET_CARD_LIMIT: u32 = 100;

/// Runs card searches against a wiki backend and shapes the hits.
#[derive(Clone)]
pub struct CardSearchService {
    wiki: Arc<dyn WikiSearch>,
    links: WikiLinks,
}

impl CardSearchService {
    pub fn new(wiki: Arc<dyn WikiSearch>, links: WikiLinks) -> Self {
        Self { wiki, links }
    }

    pub fn links(&self) -> &WikiLinks {
        &self.links
    }

    /// Search for cards matching `query`.
    ///
    /// The query is first sent with a " TCG" suffix and each hit is
    /// classified. Only when that returns nothing at all is the plain query
    /// tried; those hits are never marked as TCG. Any upstream failure fails
    /// the whole search.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, WikiError> {
        let tcg_query = format!("{}{}", query, TCG_SUFFIX);
        let hits = self.wiki.search(&tcg_query, PRIMARY_LIMIT).await?;

        let results: Vec<SearchResult> = hits
            .into_iter()
            .take(PRIMARY_KEEP)
            .map(|hit| {
                let tcg = is_tcg(&hit.title, &hit.snippet);
                SearchResult {
                    url: self.links.article(&hit.title),
                    title: hit.title,
                    snippet: hit.snippet,
                    size: hit.size,
                    is_tcg: tcg,
                }
            })
            .collect();

        if !results.is_empty() {
            debug!("'{}' matched {} hits", tcg_query, results.len());
            return Ok(results);
        }

        info!("No hits for '{}', falling back to plain query", tcg_query);
        let hits = self.wiki.search(query, FALLBACK_LIMIT).await?;

        Ok(hits
            .into_iter()
            .take(FALLBACK_KEEP)
            .map(|hit| SearchResult {
                url: self.links.article(&hit.title),
                title: hit.title,
                snippet: hit.snippet,
                size: hit.size,
                is_tcg: false,
            })
            .collect())
    }

    /// List the cards filed under `"Category:{set_name} cards"`.
    pub async fn set_cards(&self, set_name: &str) -> Result<Vec<SetCard>, WikiError> {
        let category = format!("Category:{} cards", set_name);
        let members = self.wiki.category_members(&category, SET_CARD_LIMIT).await?;

        Ok(members
            .into_iter()
            .map(|member| SetCard {
                url: self.links.article(&member.title),
                title: member.title,
                id: member.page_id,
                set: set_name.to_string(),
            })
            .collect())
    }
}
