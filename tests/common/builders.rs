//! Test builders — ergonomic constructors for datasets, routers and requests.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use ratings_api::AppState;
use ratings_core::{Company, Dataset, MatchResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// DatasetBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Dataset`] fixtures.
///
/// ```rust
/// let dataset = DatasetBuilder::new()
///     .company("Acme Corp", 4.0)
///     .unrated("Mystery Ltd")
///     .build();
/// ```
#[derive(Default)]
pub struct DatasetBuilder {
    companies: Vec<Company>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corpus(mut self, corpus: &[(&str, f64)]) -> Self {
        self.companies.extend(super::fixtures::companies(corpus));
        self
    }

    pub fn company(mut self, name: &str, rating: f64) -> Self {
        self.companies.push(Company::new(name, rating));
        self
    }

    pub fn unrated(mut self, name: &str) -> Self {
        self.companies.push(Company {
            name: name.to_string(),
            rating: None,
        });
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.companies, "test-builder")
    }

    pub fn state(self) -> AppState {
        AppState::new(Arc::new(self.build()))
    }
}

// ---------------------------------------------------------------------------
// In-process requests
// ---------------------------------------------------------------------------

/// Response captured from a oneshot request against the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn results(&self) -> BTreeMap<String, MatchResult> {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Send `GET uri` to a fresh router over `state`.
pub async fn get(state: AppState, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = ratings_api::router(state).oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// `/.netlify/functions/api?companyNames=<names>` with `names` passed verbatim.
pub fn lookup_uri(names: &str) -> String {
    format!("{}?companyNames={}", ratings_api::COMPANIES_ROUTE, names)
}
