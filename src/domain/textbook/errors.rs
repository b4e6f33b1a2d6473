//! Textbook Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextbookError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Chapter number out of range: {chapter} (chapters: {chapter_count})")]
    OutOfRange { chapter: usize, chapter_count: usize },

    #[error("Unknown textbook status: {0}")]
    UnknownStatus(String),
}
