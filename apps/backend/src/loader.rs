//! Filesystem word-bank loader.
//!
//! The data directory holds `levels.json` plus one `.tsv` file per level:
//!
//! ```json
//! [
//!   { "id": "bridge", "name": "BRIDGE (beginner)", "file": "bridge.tsv" },
//!   { "id": "jp",     "name": "JP (elementary)",   "file": "jp.tsv" }
//! ]
//! ```
//!
//! The manifest array order is the difficulty order, easiest first. Any
//! `.tsv` in the directory the manifest does not mention is still loaded
//! (file stem as id and display name) and appended after the configured
//! levels, in filename order.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use vocab_core::{parse, LevelConfig, VocabularyCatalog, WordRecord};

/// One entry of `levels.json`.
#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub file: String,
}

/// Load the catalog from a data directory.
pub fn load_catalog(data_dir: &Path) -> anyhow::Result<VocabularyCatalog> {
    let manifest_path = data_dir.join("levels.json");
    let manifest_raw = fs::read_to_string(&manifest_path)
        .with_context(|| format!("reading {}", manifest_path.display()))?;
    let manifest: Vec<ManifestEntry> = serde_json::from_str(&manifest_raw)
        .with_context(|| format!("parsing {}", manifest_path.display()))?;

    let mut config = Vec::with_capacity(manifest.len());
    let mut loaded: Vec<(String, Vec<WordRecord>)> = Vec::new();

    for entry in &manifest {
        let words = load_words(&data_dir.join(&entry.file))?;
        config.push(LevelConfig::new(&entry.id, &entry.name));
        loaded.push((entry.id.clone(), words));
    }

    // Word lists the manifest does not mention still get loaded; they sit
    // after the configured levels and outside the difficulty order.
    let mut extra = Vec::new();
    for dir_entry in fs::read_dir(data_dir)
        .with_context(|| format!("reading {}", data_dir.display()))?
    {
        let path = dir_entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("tsv") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if manifest.iter().any(|e| e.file == name) {
            continue;
        }
        extra.push(path);
    }
    extra.sort();
    for path in extra {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let words = load_words(&path)?;
        loaded.push((stem.to_string(), words));
    }

    let catalog = VocabularyCatalog::build(&config, loaded);
    tracing::info!(
        levels = catalog.len(),
        words = catalog.word_count(),
        "word bank loaded"
    );
    Ok(catalog)
}

fn load_words(path: &Path) -> anyhow::Result<Vec<WordRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&content).with_context(|| format!("parsing {}", path.display()))
}
