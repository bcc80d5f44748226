pub mod health;
pub mod submit;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/submit-application",
            post(submit::handle_submit_application),
        )
        .with_state(state)
}
