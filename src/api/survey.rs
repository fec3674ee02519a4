//! Survey processing endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use crate::error::ApiResult;
use crate::models::InsightRecord;
use crate::AppState;

/// POST /process-survey
///
/// Accepts one survey submission, runs the insight pipeline and
/// returns the persisted record. The body is taken as raw JSON so the
/// validator owns every structural check and its error message.
pub async fn process_survey(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<InsightRecord>> {
    let record = state.pipeline.process(&payload).await?;
    Ok(Json(record))
}

/// Build survey routes
pub fn survey_routes() -> Router<AppState> {
    Router::new().route("/process-survey", post(process_survey))
}
