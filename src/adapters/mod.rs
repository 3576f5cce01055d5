// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod http;
pub mod page;

use crate::domain::ports::DataSource;
use crate::utils::validation::is_remote;

pub use file::FileSource;
pub use http::HttpSource;
pub use page::{Node, PageContainer, RecordingAlerter, TerminalAlerter, TextInput};

/// Picks the HTTP or filesystem source for a location.
pub fn open_source(location: &str) -> Box<dyn DataSource> {
    if is_remote(location) {
        Box::new(HttpSource::new(location.to_string()))
    } else {
        Box::new(FileSource::new(location.to_string()))
    }
}
