use crate::core::loader::{LoadHandle, Loader};
use crate::core::matcher::{find_matches, Query};
use crate::core::renderer::{self, NO_RESULTS_MESSAGE};
use crate::core::store::DataStore;
use crate::domain::ports::{Alerter, ConfigProvider, Container, DataSource, InputField};

pub const EMPTY_QUERY_ALERT: &str = "Please enter a keyword to search.";

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub no_results: String,
    pub empty_query: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_results: NO_RESULTS_MESSAGE.to_string(),
            empty_query: EMPTY_QUERY_ALERT.to_string(),
        }
    }
}

impl Messages {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            no_results: config.no_results_message().to_string(),
            empty_query: config.empty_query_alert().to_string(),
        }
    }
}

/// Binds the page's three triggers (startup, search, reset) to the loader, matcher and
/// renderer.
pub struct Controller<C: Container, I: InputField, A: Alerter> {
    store: DataStore,
    container: C,
    input: I,
    alerter: A,
    messages: Messages,
}

impl<C: Container, I: InputField, A: Alerter> Controller<C, I, A> {
    pub fn new(store: DataStore, container: C, input: I, alerter: A) -> Self {
        Self::with_messages(store, container, input, alerter, Messages::default())
    }

    pub fn with_messages(
        store: DataStore,
        container: C,
        input: I,
        alerter: A,
        messages: Messages,
    ) -> Self {
        Self {
            store,
            container,
            input,
            alerter,
            messages,
        }
    }

    /// Starts the one-time background load. Searches issued before it finishes see an
    /// empty dataset.
    pub fn on_startup<S: DataSource + 'static>(&self, loader: Loader<S>) -> LoadHandle {
        loader.spawn(self.store.clone())
    }

    pub fn on_search(&mut self) {
        let Some(query) = Query::parse(&self.input.value()) else {
            renderer::hide(&mut self.container);
            self.alerter.alert(&self.messages.empty_query);
            return;
        };

        let snapshot = self.store.snapshot();
        let matches = snapshot
            .as_deref()
            .map(|dataset| find_matches(dataset, &query))
            .unwrap_or_default();

        tracing::debug!("Query '{}' matched {} places", query.as_str(), matches.len());
        renderer::render(&mut self.container, &matches, &self.messages.no_results);
    }

    pub fn on_reset(&mut self) {
        renderer::reset(&mut self.container, &mut self.input);
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn alerter(&self) -> &A {
        &self.alerter
    }
}
