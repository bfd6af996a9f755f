//! ratings-feeds — dataset source adapters and the one-shot loader.
//!
//! A [`Feed`] produces the raw, still-compressed dataset body. The
//! [`DatasetLoader`] pulls from a feed exactly once, decodes the body into a
//! [`ratings_core::Dataset`], and hands out shared references to it.

pub mod file;
pub mod http;
pub mod loader;

pub use file::FileFeed;
pub use http::HttpFeed;
pub use loader::{DatasetLoader, LoadError};

use bytes::Bytes;
use ratings_core::config::DatasetConfig;

/// Errors raised while fetching the raw dataset body.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Where the raw dataset body comes from.
#[derive(Debug)]
pub enum Feed {
    Http(HttpFeed),
    File(FileFeed),
}

impl Feed {
    /// Pick the source named by `config`: a local `path` wins over `url`.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, FeedError> {
        match &config.path {
            Some(path) => Ok(Feed::File(FileFeed::new(path))),
            None => Ok(Feed::Http(HttpFeed::new(&config.url, config.timeout())?)),
        }
    }

    /// Read the full, still-compressed body into memory.
    pub async fn fetch(&self) -> Result<Bytes, FeedError> {
        match self {
            Feed::Http(feed) => feed.fetch().await,
            Feed::File(feed) => feed.fetch().await,
        }
    }

    /// Human-readable location, used in logs and on the dataset.
    pub fn describe(&self) -> String {
        match self {
            Feed::Http(feed) => feed.url().to_string(),
            Feed::File(feed) => feed.path().display().to_string(),
        }
    }
}
