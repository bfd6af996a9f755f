//! File feed — reads a local copy of the compressed dataset.

use crate::FeedError;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn fetch(&self) -> Result<Bytes, FeedError> {
        tracing::info!(path = %self.path.display(), "reading dataset file");
        tokio::fs::read(&self.path)
            .await
            .map(Bytes::from)
            .map_err(|source| FeedError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}
