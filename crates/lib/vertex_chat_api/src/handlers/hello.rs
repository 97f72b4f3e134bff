//! Hello world endpoint — bootstrap health check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::HelloWorldResponse;

/// `GET /api/hello` — reports the core library version and the configured reply latency.
pub async fn hello_world(State(state): State<AppState>) -> AppResult<Json<HelloWorldResponse>> {
    Ok(Json(HelloWorldResponse {
        greeting: vertex_chat_core::hello::hello_world(),
        latency_ms: state.config.chat.latency.as_millis() as u64,
    }))
}
