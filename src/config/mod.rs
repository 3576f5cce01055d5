#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::controller::EMPTY_QUERY_ALERT;
use crate::core::loader::DEFAULT_SOURCE;
use crate::core::renderer::NO_RESULTS_MESSAGE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_source, Validate};
use self::toml_config::TomlConfig;

pub const DEFAULT_CONTAINER_ID: &str = "recommendations-container";

/// Resolved settings: defaults, then TOML values, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub no_results_message: String,
    pub empty_query_alert: String,
    pub container_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            no_results_message: NO_RESULTS_MESSAGE.to_string(),
            empty_query_alert: EMPTY_QUERY_ALERT.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let mut settings = Self::default();

        if let Some(source) = config.source {
            settings.source = source.location;
        }

        if let Some(display) = config.display {
            if let Some(message) = display.no_results_message {
                settings.no_results_message = message;
            }
            if let Some(message) = display.empty_query_alert {
                settings.empty_query_alert = message;
            }
            if let Some(id) = display.container_id {
                settings.container_id = id;
            }
        }

        settings
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_source("source", &self.source)?;
        validate_non_empty_string("no_results_message", &self.no_results_message)?;
        validate_non_empty_string("empty_query_alert", &self.empty_query_alert)?;
        validate_non_empty_string("container_id", &self.container_id)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn source(&self) -> &str {
        &self.source
    }

    fn no_results_message(&self) -> &str {
        &self.no_results_message
    }

    fn empty_query_alert(&self) -> &str {
        &self.empty_query_alert
    }

    fn container_id(&self) -> &str {
        &self.container_id
    }
}
