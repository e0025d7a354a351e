//! Word fetch endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};
use vocab_core::SelectionEngine;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// Default word count when the query names neither a count nor a range.
const DEFAULT_COUNT: i64 = 10;

/// GET /api/words/{level_id}
///
/// `?start=&end=` selects a positional range within the level; otherwise
/// `?count=` (default 10) selects a random set, expanding into adjacent
/// levels when the level runs short.
pub async fn fetch(
    State(state): State<AppState>,
    Path(level_id): Path<String>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<WordsResponse>> {
    let catalog = state.catalog();
    let engine = SelectionEngine::new(&catalog);

    let selected = match (query.start, query.end) {
        (Some(start), Some(end)) => {
            if query.count.is_some() {
                return Err(ApiError::BadRequest(
                    "count cannot be combined with start/end".to_string(),
                ));
            }
            engine.select_by_range(&level_id, start, end)?
        }
        (None, None) => {
            let count = query.count.unwrap_or(DEFAULT_COUNT);
            engine.select_by_count(&level_id, count, &mut rand::thread_rng())?
        }
        _ => {
            return Err(ApiError::BadRequest(
                "start and end must be supplied together".to_string(),
            ))
        }
    };

    Ok(Json(WordsResponse {
        words: selected.into_iter().map(ApiWord::from).collect(),
    }))
}
