//! Loading of the detailed Bible document.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::SummaryError;

/// Parse a detailed document held in memory.
pub fn parse_detailed(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read and parse the detailed document at `path`.
///
/// The whole file is read as UTF-8 before parsing.
pub fn load_detailed<P: AsRef<Path>>(path: P) -> Result<Value, SummaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SummaryError::InputMissing {
            path: path.to_path_buf(),
        },
        _ => SummaryError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_detailed(&content).map_err(|source| SummaryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
