use crate::core::store::DataStore;
use crate::domain::model::{Category, Dataset};
use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use tokio::task::JoinHandle;

/// Default location of the dataset document, relative to the page.
pub const DEFAULT_SOURCE: &str = "travel_recommendation_api.json";

pub struct Loader<S: DataSource> {
    source: S,
}

impl<S: DataSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches and parses the whole document without touching any store.
    pub async fn fetch_dataset(&self) -> Result<Dataset> {
        tracing::debug!("Fetching travel data from: {}", self.source.location());
        let bytes = self.source.fetch().await?;
        tracing::debug!("Received {} bytes", bytes.len());
        Dataset::from_slice(&bytes)
    }

    /// One best-effort attempt. On failure the store keeps whatever it held before.
    pub async fn load(&self, store: &DataStore) {
        match self.fetch_dataset().await {
            Ok(dataset) => {
                tracing::info!(
                    "Loaded {} countries, {} beaches, {} temples from {}",
                    dataset.countries.len(),
                    dataset.beaches.len(),
                    dataset.temples.len(),
                    self.source.location()
                );
                for category in Category::ALL {
                    tracing::debug!(
                        "{}: {} searchable places",
                        category.key(),
                        dataset.places(category).count()
                    );
                }
                store.replace(dataset);
            }
            Err(e) if e.is_load_failure() => {
                tracing::error!(
                    "Error fetching travel data from {}: {}",
                    self.source.location(),
                    e
                );
            }
            Err(e) => {
                tracing::error!(
                    "Unexpected error while loading travel data from {}: {}",
                    self.source.location(),
                    e
                );
            }
        }
    }
}

impl<S: DataSource + 'static> Loader<S> {
    /// Runs [`Loader::load`] on a background task.
    pub fn spawn(self, store: DataStore) -> LoadHandle {
        LoadHandle {
            inner: tokio::spawn(async move { self.load(&store).await }),
        }
    }
}

/// Completion handle for a background load.
#[derive(Debug)]
pub struct LoadHandle {
    inner: JoinHandle<()>,
}

impl LoadHandle {
    /// Waits for the load to settle, whether it succeeded or not.
    pub async fn wait(self) {
        if let Err(e) = self.inner.await {
            tracing::error!("Load task did not complete: {}", e);
        }
    }
}
