use super::toml_config::TomlConfig;
use super::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use crate::app::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "travel-bloom")]
#[command(about = "Search travel recommendations (cities, beaches, temples) by keyword")]
pub struct CliConfig {
    #[arg(long, help = "Dataset location: an http(s) URL or a file path")]
    pub source: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long = "query",
        help = "Run this search once the dataset is loaded, then exit (repeatable)"
    )]
    pub queries: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit diagnostics as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Reads the TOML file when given, applies `--source`, and validates the result.
    pub fn settings(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => Settings::from_toml(TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        let settings = base.with_source(self.source.clone());
        settings.validate()?;
        Ok(settings)
    }
}
