//! Word selection: random count-based picks with adjacent-level expansion,
//! and positional range slices.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::VocabularyCatalog;
use crate::error::Result;
use crate::types::WordRecord;

/// Read-only selection over a catalog.
///
/// The engine keeps no state of its own; every call reads the shared
/// catalog, so concurrent selections need no coordination. Randomness is
/// injected so callers control determinism: tests pass a seeded rng, the
/// HTTP layer passes `thread_rng()`.
pub struct SelectionEngine<'a> {
    catalog: &'a VocabularyCatalog,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a VocabularyCatalog) -> Self {
        Self { catalog }
    }

    /// Select `count` words from a level, expanding into adjacent levels
    /// when the level alone cannot satisfy the request.
    ///
    /// When the level has enough words, the result is a uniform random
    /// sample without replacement, shuffled. When it does not, the whole
    /// level is kept in source order and adjacent levels are walked
    /// nearest-first, appending words whose term (case-insensitive) has
    /// not been seen yet. The expanded result keeps assembly order: own
    /// level first, then neighbors by distance. That ordering carries the
    /// closest-levels-first meaning, so it is not shuffled away.
    ///
    /// `count <= 0` yields an empty result. Exhausting every adjacent
    /// level with words still owed yields fewer than `count` words, which
    /// is not an error.
    pub fn select_by_count<R: Rng>(
        &self,
        level_id: &str,
        count: i64,
        rng: &mut R,
    ) -> Result<Vec<WordRecord>> {
        let level = self.catalog.level(level_id)?;
        if count <= 0 {
            return Ok(Vec::new());
        }
        let count = count as usize;

        if count <= level.words.len() {
            let mut picked: Vec<WordRecord> =
                level.words.choose_multiple(rng, count).cloned().collect();
            picked.shuffle(rng);
            return Ok(picked);
        }

        let mut result = level.words.clone();
        let mut seen: HashSet<String> =
            result.iter().map(|w| w.term.to_lowercase()).collect();
        let mut needed = count - result.len();

        for adjacent_id in self.catalog.adjacent_levels(level_id)? {
            if needed == 0 {
                break;
            }
            for word in &self.catalog.level(adjacent_id)?.words {
                if needed == 0 {
                    break;
                }
                if seen.insert(word.term.to_lowercase()) {
                    result.push(word.clone());
                    needed -= 1;
                }
            }
        }

        result.truncate(count);
        Ok(result)
    }

    /// Select the words at 1-based positions `[start, end]` of one level.
    ///
    /// Out-of-bounds positions are clamped, never rejected: `start` rises
    /// to 1, `end` drops to the level length, and an inverted range
    /// collapses onto `end`. No expansion, no dedup, source order.
    pub fn select_by_range(&self, level_id: &str, start: i64, end: i64) -> Result<Vec<WordRecord>> {
        let level = self.catalog.level(level_id)?;
        let len = level.words.len() as i64;

        let mut start = start.max(1);
        let end = end.min(len);
        if start > end {
            start = end;
        }
        if end < 1 {
            return Ok(Vec::new());
        }

        Ok(level.words[start as usize - 1..end as usize].to_vec())
    }
}
