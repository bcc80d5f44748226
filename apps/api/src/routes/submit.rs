use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Fixed acknowledgement message for a saved submission. Part of the wire
/// contract; the form surfaces it to the applicant verbatim.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Application submitted successfully!";

/// POST /submit-application
///
/// Appends the request body to the store exactly as received. No schema
/// check happens here; the form validates every field before submitting,
/// and the endpoint stays permissive for anything else that posts to it.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(record): Json<Value>,
) -> Result<Json<Value>, AppError> {
    state.store.append(record.clone()).await?;
    info!("New application saved: {record}");
    Ok(Json(json!({ "message": SUBMIT_SUCCESS_MESSAGE })))
}
