//! Level listing endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/levels
pub async fn list(State(state): State<AppState>) -> Result<Json<LevelListResponse>> {
    let catalog = state.catalog();
    Ok(Json(LevelListResponse {
        levels: catalog.levels(),
    }))
}
