//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors from catalog lookups and word-list parsing.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("unknown level: {id}")]
    UnknownLevel { id: String },

    #[error("invalid ordinal at line {line}: {value}")]
    InvalidOrdinal { line: usize, value: String },

    #[error("expected 3 tab-separated columns at line {line}")]
    MissingColumns { line: usize },
}
