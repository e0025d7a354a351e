//! Core vocabulary-quiz library shared by the backend application.
//!
//! Provides:
//! - Tab-separated word-list parser
//! - The vocabulary catalog with its configured difficulty ordering
//! - Word selection (random count-based with adjacent-level expansion,
//!   positional range slices)
//! - Answer matching for typed quiz answers
//! - Shared types (WordRecord, Level, LevelConfig, etc.)

pub mod catalog;
pub mod error;
pub mod matching;
pub mod parser;
pub mod selection;
pub mod types;

pub use catalog::VocabularyCatalog;
pub use error::{Result, VocabError};
pub use matching::{check_answer, normalize_answer, MatchResult};
pub use parser::parse;
pub use selection::SelectionEngine;
pub use types::{Level, LevelConfig, LevelSummary, WordRecord};
