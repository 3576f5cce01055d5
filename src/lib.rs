pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{open_source, FileSource, HttpSource, PageContainer, TextInput};
pub use app::{Flow, OutputFormat};
pub use config::Settings;
pub use crate::core::{
    controller::{Controller, Messages},
    loader::{LoadHandle, Loader},
    matcher::{find_matches, Query},
    store::DataStore,
};
pub use domain::model::{Category, Country, Dataset, Place};
pub use utils::error::{Result, TravelError};
