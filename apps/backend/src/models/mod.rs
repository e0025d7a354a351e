//! Wire types for the quiz API.
//!
//! Field names here are the wire format; the core's types stay out of it.
//! Words go out as `{no, word, meaning}` to match what the quiz front-end
//! expects.

use serde::{Deserialize, Serialize};

// Re-export shared types from vocab-core
pub use vocab_core::types::{LevelConfig, LevelSummary, WordRecord};

/// A word as serialized on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiWord {
    pub no: u32,
    pub word: String,
    pub meaning: String,
}

impl From<WordRecord> for ApiWord {
    fn from(record: WordRecord) -> Self {
        Self {
            no: record.ordinal,
            word: record.term,
            meaning: record.meaning,
        }
    }
}

/// GET /api/levels response
#[derive(Debug, Serialize, Deserialize)]
pub struct LevelListResponse {
    pub levels: Vec<LevelSummary>,
}

/// Query parameters for GET /api/words/{level_id}.
///
/// `start`/`end` together select range mode; `count` alone (or nothing,
/// defaulting to 10) selects count mode.
#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    pub count: Option<i64>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// GET /api/words/{level_id} response
#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<ApiWord>,
}

/// POST /api/check request
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckRequest {
    pub answer: String,
    pub correct: String,
}

/// POST /api/check response
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// POST /api/reload response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub levels: usize,
    pub words: usize,
}
