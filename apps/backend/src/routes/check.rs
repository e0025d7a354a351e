//! Answer check endpoint

use axum::Json;
use vocab_core::check_answer;

use crate::error::Result;
use crate::models::*;

/// POST /api/check
pub async fn check(Json(payload): Json<CheckRequest>) -> Result<Json<CheckResponse>> {
    let result = check_answer(&payload.answer, &payload.correct);
    Ok(Json(CheckResponse {
        is_correct: result.is_correct,
        correct_answer: payload.correct,
    }))
}
