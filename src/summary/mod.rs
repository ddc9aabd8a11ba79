//! Reduction of a detailed Bible document to per-chapter verse counts.
//!
//! # Module Structure
//!
//! - [`types`] - The summary document model
//! - [`generate`] - Traversal of the detailed document

pub mod generate;
mod types;

pub use generate::summarize;
pub use types::{Summary, SummaryBook, SummaryChapter};
