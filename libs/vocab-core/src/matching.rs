//! Answer matching for typed quiz answers.
//!
//! Word meanings come annotated with a part-of-speech prefix ("n. 사진")
//! and may list several acceptable translations separated by commas. The
//! quiz accepts an answer that matches the whole meaning or any one of the
//! comma-separated alternatives, prefix stripped on both sides.

use serde::{Deserialize, Serialize};

/// Part-of-speech prefixes stripped before comparison. Longer prefixes
/// listed before their shorter overlaps ("adv." before "ad.", "a.").
const POS_PREFIXES: &[&str] = &[
    "adv.", "prep.", "conj.", "pron.", "int.", "ad.", "n.", "v.", "a.",
];

/// Result of checking a typed answer against the correct meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub normalized_answer: String,
    /// Normalized correct meaning (for display).
    pub normalized_correct: String,
}

/// Strip whitespace and one leading part-of-speech prefix.
pub fn normalize_answer(answer: &str) -> String {
    let answer = answer.trim();
    let lowered = answer.to_lowercase();
    for prefix in POS_PREFIXES {
        if lowered.starts_with(prefix) {
            return answer[prefix.len()..].trim().to_string();
        }
    }
    answer.to_string()
}

/// Check a typed answer against the correct meaning.
///
/// Correct when the normalized answer equals the normalized meaning, or
/// equals any comma-separated alternative within it.
pub fn check_answer(answer: &str, correct: &str) -> MatchResult {
    let normalized_answer = normalize_answer(answer);
    let normalized_correct = normalize_answer(correct);

    let is_correct = normalized_answer == normalized_correct
        || normalized_correct
            .split(',')
            .any(|alt| alt.trim() == normalized_answer);

    MatchResult {
        is_correct,
        normalized_answer,
        normalized_correct,
    }
}
