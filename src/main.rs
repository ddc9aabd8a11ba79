//! bible-summary - write per-chapter verse counts for a detailed Bible dataset
//!
//! Reads `data/web.json` and writes `bible_summary.json` in the working
//! directory. There are no options beyond `--help` and `--version`.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use bible_summary::{run, Config};

/// Reduce a detailed Bible JSON dataset to per-chapter verse counts
#[derive(Parser)]
#[command(name = "bible-summary", version, about, long_about = None)]
struct Cli {}

/// Diagnostics go to stderr so stdout only carries progress lines.
#[cfg(not(tarpaulin_include))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let config = Config::default();
    let stdout = io::stdout();
    let mut console = stdout.lock();
    run(&config, &mut console)?;

    Ok(())
}
