//! Paths used by a summary run.

use std::path::{Path, PathBuf};

/// Detailed dataset read by default, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/web.json";

/// Summary written by default, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "bible_summary.json";

/// Configuration for a single run.
///
/// The binary always uses [`Config::default`]; other paths are only
/// supplied programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Detailed document to load
    pub input_path: PathBuf,
    /// Where the summary document is written (overwritten if present)
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
