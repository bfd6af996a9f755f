//! HTTP(S) feed — a single GET against the upstream dataset URL.

use crate::FeedError;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("ratings/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FeedError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the URL and buffer the whole body. Non-2xx statuses are errors.
    pub async fn fetch(&self) -> Result<Bytes, FeedError> {
        tracing::info!(url = %self.url, "fetching dataset");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FeedError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FeedError::Request {
                url: self.url.clone(),
                source,
            })?;

        tracing::debug!(url = %self.url, bytes = body.len(), "dataset body received");
        Ok(body)
    }
}
