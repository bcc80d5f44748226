use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Fixed failure message returned to the browser whenever a submission
/// cannot be saved. Part of the wire contract; do not reword.
pub const SUBMIT_FAILURE_MESSAGE: &str = "An error occurred while saving your application.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(e) => {
                tracing::error!("Error saving application: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SUBMIT_FAILURE_MESSAGE)
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}
