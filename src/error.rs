//! Error types for the student guide crate.
//!
//! Unknown university ids are not errors (lookups return `Option`), and an
//! empty query is a defined result, so the taxonomy stays small.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuideError {
    /// The dataset file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset failed to parse or validate. Fatal at startup.
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    /// The key-value store backing the selection could not be read or written.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// A debounced search was set up with no tokio runtime to run its timers.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(String),
}

pub type Result<T> = std::result::Result<T, GuideError>;
