//! One-shot dataset loader.
//!
//! [`DatasetLoader::load`] fetches, inflates and parses the dataset the first
//! time it is called. Concurrent callers wait on the same initialization and
//! later callers get the cached `Arc<Dataset>` without doing any work. A
//! failed load leaves the cell empty; the loader never exits the process, the
//! caller decides what a failure means.

use crate::{Feed, FeedError};
use ratings_core::config::DatasetConfig;
use ratings_core::{Compression, Dataset, DecodeError};
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] FeedError),
    #[error("failed to decode dataset from {source_name}: {error}")]
    Decode {
        source_name: String,
        #[source]
        error: DecodeError,
    },
}

#[derive(Debug)]
pub struct DatasetLoader {
    feed: Feed,
    compression: Compression,
    cell: OnceCell<Arc<Dataset>>,
}

impl DatasetLoader {
    pub fn new(feed: Feed, compression: Compression) -> Self {
        Self {
            feed,
            compression,
            cell: OnceCell::new(),
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Result<Self, LoadError> {
        Ok(Self::new(Feed::from_config(config)?, config.compression))
    }

    /// Load the dataset, running the fetch at most once per loader.
    pub async fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cell
            .get_or_try_init(|| self.fetch_and_decode())
            .await
            .map(Arc::clone)
    }

    /// The dataset, if a previous [`load`](Self::load) succeeded.
    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.cell.get().cloned()
    }

    async fn fetch_and_decode(&self) -> Result<Arc<Dataset>, LoadError> {
        let source_name = self.feed.describe();
        let body = self.feed.fetch().await?;

        let dataset = Dataset::decode(&body, self.compression, source_name.clone())
            .map_err(|error| LoadError::Decode { source_name, error })?;

        tracing::info!(
            source = dataset.source(),
            records = dataset.len(),
            compressed_bytes = body.len(),
            loaded_at = %dataset.loaded_at(),
            "dataset loaded"
        );
        Ok(Arc::new(dataset))
    }
}
