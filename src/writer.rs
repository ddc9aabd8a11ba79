//! Serialization of the summary document.
//!
//! Output is pretty-printed JSON with two-space indentation and non-ASCII
//! characters written literally. No trailing newline is emitted.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::SummaryError;
use crate::summary::Summary;

/// Render the summary to the exact text that [`save_summary`] writes.
pub fn render_summary(summary: &Summary) -> Result<String, SummaryError> {
    serde_json::to_string_pretty(summary).map_err(SummaryError::Serialize)
}

/// Write the summary to `path`, replacing any existing file, then report the
/// saved path on `console`.
pub fn save_summary<P, W>(summary: &Summary, path: P, console: &mut W) -> Result<(), SummaryError>
where
    P: AsRef<Path>,
    W: Write,
{
    let path = path.as_ref();
    let text = render_summary(summary)?;

    fs::write(path, text).map_err(|source| SummaryError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    writeln!(console, "Summary JSON saved to {}", path.display()).map_err(SummaryError::Console)
}
