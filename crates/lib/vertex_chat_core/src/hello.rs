//! Greeting used by the API health check.

/// Returns a greeting string with the crate version.
pub fn hello_world() -> String {
    format!("Hello from vertex_chat_core v{}", super::version())
}
