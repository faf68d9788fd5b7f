//! MediaWiki API client.
//!
//! Bulbapedia's API is public and needs no key. Requests carry a
//! descriptive User-Agent as the MediaWiki etiquette asks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{CategoryMember, QueryResponse, SearchHit};
use super::{WikiError, WikiSearch};
use crate::config::WikiConfig;

/// MediaWiki API client.
pub struct MediaWikiClient {
    client: Client,
    api_url: String,
}

impl MediaWikiClient {
    /// Create a new client for the configured wiki.
    pub fn new(config: &WikiConfig) -> Result<Self, WikiError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WikiError::NotConfigured(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run an `action=query` request with extra list parameters.
    async fn query<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T, WikiError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("origin", "*")])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WikiError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| WikiError::ParseError(format!("Failed to parse query response: {}", e)))
    }
}

#[async_trait]
impl WikiSearch for MediaWikiClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, WikiError> {
        debug!("Wiki search: query='{}', limit={}", query, limit);

        let response: QueryResponse = self
            .query(&[
                ("list", "search".to_string()),
                ("srsearch", query.to_string()),
                ("srlimit", limit.to_string()),
            ])
            .await?;

        let hits = response.into_hits();
        debug!("Wiki search '{}' returned {} hits", query, hits.len());
        Ok(hits)
    }

    async fn category_members(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<CategoryMember>, WikiError> {
        debug!("Wiki category members: category='{}', limit={}", category, limit);

        let response: QueryResponse = self
            .query(&[
                ("list", "categorymembers".to_string()),
                ("cmtitle", category.to_string()),
                ("cmlimit", limit.to_string()),
            ])
            .await?;

        Ok(response.into_members())
    }
}
