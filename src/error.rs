//! Errors raised while loading, summarizing or saving.

use std::path::PathBuf;

/// Errors that can occur during a summary run.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Input file '{}' does not exist", path.display())]
    InputMissing { path: PathBuf },

    #[error("Failed to read input file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{}' is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected shape at {location}: expected {expected}, found {found}")]
    Shape {
        location: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to serialize summary")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write summary to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write progress message")]
    Console(#[source] std::io::Error),
}
