pub mod controller;
pub mod loader;
pub mod matcher;
pub mod renderer;
pub mod store;

pub use crate::domain::model::{Category, Country, Dataset, Place};
pub use crate::domain::ports::{Alerter, ConfigProvider, Container, DataSource, InputField};
pub use crate::utils::error::Result;
