//! Responder configuration.

use std::time::Duration;

use thiserror::Error;

/// Environment variable overriding the simulated latency, in milliseconds.
pub const LATENCY_ENV: &str = "VERTEX_CHAT_LATENCY_MS";

/// Simulated latency applied to every query unless overridden.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1800);

/// Errors raised while reading configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid latency '{0}': expected a whole number of milliseconds")]
    InvalidLatency(String),
}

/// Configuration for the simulated chat backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Delay applied before each response is produced.
    pub latency: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

impl ChatConfig {
    /// Reads configuration from the environment.
    ///
    /// | Variable                 | Default |
    /// |--------------------------|---------|
    /// | `VERTEX_CHAT_LATENCY_MS` | `1800`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(LATENCY_ENV) {
            Ok(raw) => Ok(Self {
                latency: Self::parse_latency_ms(&raw)?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parses a millisecond count such as `"250"` into a [`Duration`].
    pub fn parse_latency_ms(raw: &str) -> Result<Duration, ConfigError> {
        raw.trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidLatency(raw.to_string()))
    }

    /// Returns a config with the given latency.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}
