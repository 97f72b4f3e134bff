//! # vertex_chat_api
//!
//! HTTP API library for Vertex Chat.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use vertex_chat_core::actions::{ActionSink, LinkActionRecorder, LogSink};
use vertex_chat_core::responder::{ChatBackend, SimulatedBackend};

use crate::config::ApiConfig;
use crate::handlers::{chat, hello};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Answers chat queries.
    pub backend: Arc<dyn ChatBackend>,
    /// Records links activated in chat bubbles.
    pub recorder: LinkActionRecorder<Arc<dyn ActionSink>>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state backed by the simulated responder, recording link
    /// actions through the process logger.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_parts(
            Arc::new(SimulatedBackend::new(&config.chat)),
            Arc::new(LogSink),
            config,
        )
    }

    pub fn with_parts(
        backend: Arc<dyn ChatBackend>,
        sink: Arc<dyn ActionSink>,
        config: ApiConfig,
    ) -> Self {
        Self {
            backend,
            recorder: LinkActionRecorder::with_sink(sink),
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_API_HELLO, get(hello::hello_world))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(routes::POST_CHAT_ACTIONS, post(chat::chat_action_handler))
        .layer(cors)
        .with_state(state)
}
