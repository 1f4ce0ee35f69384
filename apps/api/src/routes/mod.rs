pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/ai/survey-generator",
            post(handlers::handle_generate_survey),
        )
        .route(
            "/api/ai/survey-generator/preview",
            post(handlers::handle_preview_prompt),
        )
        .route(
            "/api/ai/guardrails/:stage",
            get(handlers::handle_get_guardrails),
        )
        .with_state(state)
}
