pub mod handle;
pub mod loader;

pub use handle::Dataset;

use thiserror::Error;

/// Failures while reading the listings file. Any of these means the
/// filter cannot run.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required columns: {}", .missing.join(", "))]
    MissingColumns { path: String, missing: Vec<String> },
}
