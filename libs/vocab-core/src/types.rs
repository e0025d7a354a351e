//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};

/// A single vocabulary entry.
///
/// `ordinal` is the number carried over from the source word list. It is
/// display-only and makes no uniqueness claim; dedup during selection keys
/// on the lowercase `term`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub ordinal: u32,
    pub term: String,
    pub meaning: String,
}

impl WordRecord {
    pub fn new(ordinal: u32, term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            ordinal,
            term: term.into(),
            meaning: meaning.into(),
        }
    }
}

/// A named difficulty tier with its ordered word list.
///
/// Identity is `id`. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub display_name: String,
    pub words: Vec<WordRecord>,
}

/// One row of the level listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub count: usize,
}

/// One entry of the configured easy-to-hard level ordering.
///
/// The ordering is configuration data, not code: reordering difficulty
/// means editing the list the catalog is built from, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

impl LevelConfig {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
