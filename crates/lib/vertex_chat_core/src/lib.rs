//! # vertex_chat_core
//!
//! Core logic behind the Vertex chat bubble: a canned query responder with
//! simulated latency and a recorder for link actions.

pub mod actions;
pub mod config;
pub mod hello;
pub mod markup;
pub mod responder;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
