//! Test fixtures and factory functions for creating word-bank data.

use std::fs;
use std::path::Path;

use serde_json::json;

/// Generate TSV content with `n` words all prefixed with `prefix`.
pub fn tsv_content(prefix: &str, n: usize) -> String {
    (1..=n)
        .map(|i| format!("{i}\t{prefix}{i}\tn. meaning-{prefix}{i}\n"))
        .collect()
}

/// Write the standard fixture bank: levels `a`, `b`, `c` with five words
/// each and no term overlap, ordered a < b < c.
pub fn write_standard_bank(dir: &Path) {
    let manifest = json!([
        { "id": "a", "name": "Level A", "file": "a.tsv" },
        { "id": "b", "name": "Level B", "file": "b.tsv" },
        { "id": "c", "name": "Level C", "file": "c.tsv" },
    ]);
    fs::write(dir.join("levels.json"), manifest.to_string()).expect("write manifest");
    for id in ["a", "b", "c"] {
        fs::write(dir.join(format!("{id}.tsv")), tsv_content(id, 5)).expect("write word list");
    }
}

/// Create a check request body.
pub fn check_request(answer: &str, correct: &str) -> serde_json::Value {
    json!({ "answer": answer, "correct": correct })
}
