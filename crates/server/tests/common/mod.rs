//! Common test utilities for driving the router in-process.
//!
//! The fixture wires the real router to a `MockWikiSearch`, so handlers and
//! error mapping can be tested without reaching Bulbapedia.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cardscout_core::testing::MockWikiSearch;
use cardscout_core::{CardSearchService, WikiLinks, WikiSearch};
use cardscout_server::api::create_router;
use cardscout_server::state::AppState;

/// Re-export fixtures for test convenience
pub use cardscout_core::testing::fixtures;

pub const WIKI_PREFIX: &str = "https://bulbapedia.bulbagarden.net/wiki/";

pub struct TestFixture {
    pub router: Router,
    /// Mock wiki - configure search hits and category members
    pub wiki: Arc<MockWikiSearch>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let wiki = Arc::new(MockWikiSearch::new());
        let search = CardSearchService::new(
            Arc::clone(&wiki) as Arc<dyn WikiSearch>,
            WikiLinks::new(WIKI_PREFIX),
        );
        let router = create_router(Arc::new(AppState::new(search)));

        Self { router, wiki }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, Body::empty(), None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(
            Method::POST,
            path,
            Body::from(body.to_string()),
            Some("application/json"),
        )
        .await
    }

    pub async fn post_raw(&self, path: &str, body: impl Into<Body>) -> TestResponse {
        self.request(Method::POST, path, body.into(), None).await
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("Origin", "http://example.test");
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let request = builder.body(body).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}
