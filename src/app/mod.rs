// Front-end glue shared by the binary: line dispatch and output formatting.

pub mod session;

pub use session::{handle_line, render_output, run_queries, Flow, OutputFormat};
