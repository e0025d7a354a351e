//! Administrative endpoints

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::Result;
use crate::loader;
use crate::models::*;
use crate::AppState;

/// POST /api/reload
///
/// Rebuilds the catalog from the data directory and swaps it in whole.
/// In-flight requests keep the catalog they already cloned; a failed
/// reload leaves the current catalog untouched.
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>> {
    let catalog = Arc::new(loader::load_catalog(&state.data_dir)?);
    let (levels, words) = (catalog.len(), catalog.word_count());

    state.swap_catalog(catalog);
    tracing::info!(levels, words, "catalog reloaded");

    Ok(Json(ReloadResponse { levels, words }))
}
