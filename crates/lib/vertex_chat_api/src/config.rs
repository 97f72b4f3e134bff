//! API server configuration.

use vertex_chat_core::config::{ChatConfig, ConfigError};

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// Responder settings.
    pub chat: ChatConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3100".into(),
            chat: ChatConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                 | Default          |
    /// |--------------------------|------------------|
    /// | `BIND_ADDR`              | `127.0.0.1:3100` |
    /// | `VERTEX_CHAT_LATENCY_MS` | `1800`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3100".into()),
            chat: ChatConfig::from_env()?,
        })
    }

    /// Replaces the port of `bind_addr`, keeping its host.
    pub fn set_port(&mut self, port: u16) {
        let host = match self.bind_addr.rsplit_once(':') {
            Some((host, _)) => host,
            None => self.bind_addr.as_str(),
        };
        self.bind_addr = format!("{host}:{port}");
    }
}
