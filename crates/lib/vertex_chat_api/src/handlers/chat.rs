//! Chat handlers — canned responses and link action reporting.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::debug;
use vertex_chat_core::markup::extract_links;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatActionRequest, ChatRequest, ChatResponse};

/// `POST /chat` — answer a chat message after the backend's latency.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(req) = body?;

    let reply = state.backend.respond(&req.message).await;
    let links = extract_links(&reply.content);
    debug!(intent = ?reply.intent, links = links.len(), "chat reply ready");

    Ok(Json(ChatResponse {
        content: reply.content,
        intent: reply.intent,
        links,
    }))
}

/// `POST /chat/actions` — record a link the user activated.
pub async fn chat_action_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatActionRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(req) = body?;
    state.recorder.record(&req.href);
    Ok(StatusCode::NO_CONTENT)
}
