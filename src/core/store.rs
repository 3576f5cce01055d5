use crate::domain::model::Dataset;
use std::sync::{Arc, RwLock};

/// Shared handle to the loaded dataset.
///
/// The dataset is either absent or a complete snapshot; loads swap the whole `Arc`, so
/// readers holding an older snapshot are unaffected.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    inner: Arc<RwLock<Option<Arc<Dataset>>>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<Arc<Dataset>> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    pub fn replace(&self, dataset: Dataset) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::new(dataset));
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }
}
