//! Request and response bodies.

use serde::{Deserialize, Serialize};
use vertex_chat_core::markup::Link;
use vertex_chat_core::responder::Intent;

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldResponse {
    pub greeting: String,
    /// Delay applied before each chat reply.
    pub latency_ms: u64,
}

/// `POST /chat` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw text typed by the user. May be empty.
    pub message: String,
}

/// `POST /chat` reply.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Response text with inline anchor markup.
    pub content: String,
    pub intent: Intent,
    /// Anchors found in `content`, in order.
    pub links: Vec<Link>,
}

/// `POST /chat/actions` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatActionRequest {
    pub href: String,
}
