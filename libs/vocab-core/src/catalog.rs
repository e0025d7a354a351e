//! The vocabulary catalog: loaded levels plus the canonical difficulty order.
//!
//! A catalog is built once from loader output and never mutated. Hot reload
//! means building a fresh catalog and swapping the reference; readers that
//! are mid-selection keep whichever catalog they started with.

use std::collections::HashMap;

use crate::error::{Result, VocabError};
use crate::types::{Level, LevelConfig, LevelSummary, WordRecord};

/// Immutable mapping of level id to [`Level`], ordered easiest to hardest.
///
/// Levels named by the configured order come first, in that order. Loaded
/// levels the configuration does not mention are appended afterwards in
/// source order; they are listed and selectable, but sit outside the
/// difficulty ordering and therefore have no adjacent levels.
#[derive(Debug)]
pub struct VocabularyCatalog {
    levels: HashMap<String, Level>,
    order: Vec<String>,
    configured: usize,
}

impl VocabularyCatalog {
    /// Build a catalog from the configured level order and loader output.
    ///
    /// `loaded` pairs each level id with its words in source order. Records
    /// with an empty term or meaning are dropped here, so every record in
    /// the catalog satisfies the non-empty invariant. Configured levels
    /// missing from `loaded` are skipped; loaded levels missing from the
    /// configuration are appended after the configured ones.
    pub fn build(config: &[LevelConfig], loaded: Vec<(String, Vec<WordRecord>)>) -> Self {
        let mut pending: Vec<(String, Vec<WordRecord>)> = loaded
            .into_iter()
            .map(|(id, words)| {
                let words = words
                    .into_iter()
                    .filter(|w| !w.term.trim().is_empty() && !w.meaning.trim().is_empty())
                    .collect();
                (id, words)
            })
            .collect();

        let mut levels = HashMap::new();
        let mut order = Vec::new();

        for cfg in config {
            let Some(pos) = pending.iter().position(|(id, _)| *id == cfg.id) else {
                continue;
            };
            let (id, words) = pending.remove(pos);
            order.push(id.clone());
            levels.insert(
                id.clone(),
                Level {
                    id,
                    display_name: cfg.display_name.clone(),
                    words,
                },
            );
        }
        let configured = order.len();

        // Unconfigured levels keep their source order and fall back to the
        // id as display name.
        for (id, words) in pending {
            order.push(id.clone());
            levels.insert(
                id.clone(),
                Level {
                    id: id.clone(),
                    display_name: id,
                    words,
                },
            );
        }

        Self {
            levels,
            order,
            configured,
        }
    }

    /// All levels in canonical order, annotated with their word counts.
    pub fn levels(&self) -> Vec<LevelSummary> {
        self.order
            .iter()
            .map(|id| {
                let level = &self.levels[id];
                LevelSummary {
                    id: level.id.clone(),
                    display_name: level.display_name.clone(),
                    count: level.words.len(),
                }
            })
            .collect()
    }

    /// Look up a level by id.
    pub fn level(&self, id: &str) -> Result<&Level> {
        self.levels
            .get(id)
            .ok_or_else(|| VocabError::UnknownLevel { id: id.to_string() })
    }

    /// Ids of the levels adjacent to `id`, nearest first.
    ///
    /// Equal-distance ties go to the easier neighbor (lower index in the
    /// order); that tie-break is a deliberate policy, expansion prefers
    /// pulling easier words before harder ones. A level that exists but is
    /// not part of the configured order has no neighbors and yields an
    /// empty list rather than an error.
    pub fn adjacent_levels(&self, id: &str) -> Result<Vec<&str>> {
        if !self.levels.contains_key(id) {
            return Err(VocabError::UnknownLevel { id: id.to_string() });
        }
        let ordered = &self.order[..self.configured];
        let Some(pos) = ordered.iter().position(|o| o == id) else {
            return Ok(Vec::new());
        };

        let mut adjacent = Vec::with_capacity(ordered.len().saturating_sub(1));
        for distance in 1..ordered.len() {
            if pos >= distance {
                adjacent.push(ordered[pos - distance].as_str());
            }
            if pos + distance < ordered.len() {
                adjacent.push(ordered[pos + distance].as_str());
            }
        }
        Ok(adjacent)
    }

    /// Number of levels in the catalog.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog holds no levels at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total word count across all levels.
    pub fn word_count(&self) -> usize {
        self.levels.values().map(|l| l.words.len()).sum()
    }
}
