use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to fetch data: {status} {reason}")]
    StatusError { status: u16, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Invalid TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TravelError {
    /// Failures that leave the dataset absent or stale rather than stopping the program.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            TravelError::HttpError(_)
                | TravelError::StatusError { .. }
                | TravelError::IoError(_)
                | TravelError::ParseError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
