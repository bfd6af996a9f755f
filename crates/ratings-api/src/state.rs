use ratings_core::Dataset;
use std::sync::Arc;

/// State handed to every request. The dataset is immutable, so handlers
/// share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
