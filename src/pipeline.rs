//! Load, summarize and save in one pass.
//!
//! The run is linear: a missing input file ends it early and cleanly, any
//! other failure is returned to the caller with no cleanup of partial output.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::SummaryError;
use crate::loader::load_detailed;
use crate::summary::summarize;
use crate::writer::save_summary;

/// How a run finished when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input file was absent; nothing was loaded or written.
    InputMissing { path: PathBuf },
    /// The summary was written to `path`.
    Saved {
        path: PathBuf,
        books: usize,
        chapters: usize,
        verses: usize,
    },
}

/// Run the whole pipeline, printing progress lines to `console`.
pub fn run<W: Write>(config: &Config, console: &mut W) -> Result<Outcome> {
    let input = config.input_path();
    let output = config.output_path();

    if !input.exists() {
        let missing = SummaryError::InputMissing {
            path: input.to_path_buf(),
        };
        writeln!(console, "{}. Please check the file path.", missing)?;
        return Ok(Outcome::InputMissing {
            path: input.to_path_buf(),
        });
    }

    writeln!(console, "Loading detailed Bible data...")?;
    let detailed = load_detailed(input)?;

    writeln!(console, "Generating summary...")?;
    let summary = summarize(&detailed)
        .with_context(|| format!("Failed to summarize {}", input.display()))?;
    drop(detailed);

    if summary.is_empty() {
        tracing::warn!(path = %input.display(), "detailed document contains no books");
    }

    writeln!(console, "Saving summary JSON...")?;
    save_summary(&summary, output, console)?;

    tracing::info!(
        books = summary.book_count(),
        chapters = summary.chapter_count(),
        verses = summary.verse_count(),
        "summary written"
    );

    Ok(Outcome::Saved {
        path: output.to_path_buf(),
        books: summary.book_count(),
        chapters: summary.chapter_count(),
        verses: summary.verse_count(),
    })
}
