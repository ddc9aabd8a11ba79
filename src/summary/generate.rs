//! Traversal of the detailed document into a [`Summary`].
//!
//! Every optional field is looked up explicitly and falls back to one of the
//! defaults below. A field that is present but has the wrong JSON type is a
//! [`SummaryError::Shape`] and aborts the traversal; nothing is normalized.

use serde_json::{Map, Number, Value};

use super::types::{Summary, SummaryBook, SummaryChapter};
use crate::error::SummaryError;

pub const BOOKS_KEY: &str = "books";
pub const NAME_KEY: &str = "name";
pub const CHAPTERS_KEY: &str = "chapters";
pub const NUMBER_KEY: &str = "number";
pub const VERSES_KEY: &str = "verses";

/// Book name used when a book has no `name`.
pub const DEFAULT_BOOK_NAME: Option<String> = None;

/// Chapter number used when a chapter has no `number`.
pub const DEFAULT_CHAPTER_NUMBER: Option<Number> = None;

/// Stand-in for an absent `books`, `chapters` or `verses` sequence.
pub const EMPTY_SEQUENCE: &[Value] = &[];

/// Build the summary of a detailed document.
///
/// Order of books and chapters is preserved exactly; duplicates and
/// out-of-order chapter numbers pass through untouched.
pub fn summarize(detailed: &Value) -> Result<Summary, SummaryError> {
    let root = as_object(detailed, "$")?;
    let books = sequence(root, BOOKS_KEY, "$")?;

    let books = books
        .iter()
        .enumerate()
        .map(|(index, book)| summarize_book(book, &format!("$.{}[{}]", BOOKS_KEY, index)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Summary::new(books))
}

fn summarize_book(book: &Value, location: &str) -> Result<SummaryBook, SummaryError> {
    let book = as_object(book, location)?;

    let name = match present(book, NAME_KEY) {
        None => DEFAULT_BOOK_NAME,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            return Err(shape_error(
                format!("{}.{}", location, NAME_KEY),
                "string",
                other,
            ))
        }
    };

    let chapters = sequence(book, CHAPTERS_KEY, location)?
        .iter()
        .enumerate()
        .map(|(index, chapter)| {
            summarize_chapter(chapter, &format!("{}.{}[{}]", location, CHAPTERS_KEY, index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SummaryBook::new(name, chapters))
}

fn summarize_chapter(chapter: &Value, location: &str) -> Result<SummaryChapter, SummaryError> {
    let chapter = as_object(chapter, location)?;

    let number = match present(chapter, NUMBER_KEY) {
        None => DEFAULT_CHAPTER_NUMBER,
        Some(Value::Number(number)) if is_integer(number) => Some(number.clone()),
        Some(other) => {
            return Err(shape_error(
                format!("{}.{}", location, NUMBER_KEY),
                "integer",
                other,
            ))
        }
    };

    // Verse content is opaque; only the element count matters.
    let verses = sequence(chapter, VERSES_KEY, location)?.len();

    Ok(SummaryChapter::new(number, verses))
}

/// Look up `key`, treating an explicit `null` the same as a missing key.
fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// Look up a sequence field. Absent means empty; anything but an array fails,
/// including an explicit `null`.
fn sequence<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<&'a [Value], SummaryError> {
    match object.get(key) {
        None => Ok(EMPTY_SEQUENCE),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(shape_error(format!("{}.{}", location, key), "array", other)),
    }
}

fn as_object<'a>(value: &'a Value, location: &str) -> Result<&'a Map<String, Value>, SummaryError> {
    value
        .as_object()
        .ok_or_else(|| shape_error(location.to_string(), "object", value))
}

fn shape_error(location: String, expected: &'static str, found: &Value) -> SummaryError {
    SummaryError::Shape {
        location,
        expected,
        found: kind(found),
    }
}

/// Any JSON integer, signed or unsigned, whatever its magnitude within `u64`.
fn is_integer(number: &Number) -> bool {
    number.is_i64() || number.is_u64()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if is_integer(number) => "integer",
        Value::Number(_) => "non-integer number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
