//! Bible Summary - reduce a detailed Bible dataset to verse counts
//!
//! Reads a JSON document of books, chapters and full verse text and derives
//! a lighter document that keeps the book/chapter structure but replaces each
//! chapter's verses with their count.

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod summary;
pub mod writer;

pub use config::Config;
pub use error::SummaryError;
pub use pipeline::{run, Outcome};
pub use summary::{summarize, Summary, SummaryBook, SummaryChapter};
