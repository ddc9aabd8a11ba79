//! Summary document types.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Verse count for one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryChapter {
    /// Chapter number as given in the input, `null` when absent.
    /// Any JSON integer is kept, including values beyond `i64`.
    pub chapter: Option<Number>,
    /// Number of verses in the chapter
    pub verses: usize,
}

impl SummaryChapter {
    pub fn new(chapter: Option<Number>, verses: usize) -> Self {
        Self { chapter, verses }
    }

    pub fn numbered(chapter: impl Into<Number>, verses: usize) -> Self {
        Self::new(Some(chapter.into()), verses)
    }

    pub fn unnumbered(verses: usize) -> Self {
        Self::new(None, verses)
    }
}

/// Chapter summaries for one book, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBook {
    /// Book name as given in the input, `null` when absent
    pub book: Option<String>,
    pub chapters: Vec<SummaryChapter>,
}

impl SummaryBook {
    pub fn new(book: Option<String>, chapters: Vec<SummaryChapter>) -> Self {
        Self { book, chapters }
    }
}

/// The reduced document, serialized as a bare JSON array of books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary {
    pub books: Vec<SummaryBook>,
}

impl Summary {
    pub fn new(books: Vec<SummaryBook>) -> Self {
        Self { books }
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.books.iter().map(|b| b.chapters.len()).sum()
    }

    /// Total verses across every chapter of every book.
    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.iter())
            .map(|c| c.verses)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
