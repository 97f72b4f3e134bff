//! Link action recorder — reports links the user activates in a chat bubble.
//!
//! Recording is fire-and-forget: one diagnostic line per call, pairing
//! [`ACTION_LABEL`] with the target exactly as given.

use std::sync::Arc;

/// Label written in front of every recorded target.
pub const ACTION_LABEL: &str = "chat action href:";

/// Write-only destination for recorded link actions.
pub trait ActionSink: Send + Sync {
    fn emit(&self, label: &str, target: &str);
}

impl<S: ActionSink + ?Sized> ActionSink for Arc<S> {
    fn emit(&self, label: &str, target: &str) {
        (**self).emit(label, target);
    }
}

/// Sink that writes through the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ActionSink for LogSink {
    fn emit(&self, label: &str, target: &str) {
        log::info!(target: "vertex_chat::actions", "{label} {target}");
    }
}

/// Records link activations to an [`ActionSink`].
#[derive(Clone, Debug, Default)]
pub struct LinkActionRecorder<S = LogSink> {
    sink: S,
}

impl LinkActionRecorder<LogSink> {
    pub fn new() -> Self {
        Self { sink: LogSink }
    }
}

impl<S: ActionSink> LinkActionRecorder<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Records that `target` was activated. Never suspends, never fails.
    pub fn record(&self, target: &str) {
        self.sink.emit(ACTION_LABEL, target);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Records `target` through the process logger.
pub fn record(target: &str) {
    LinkActionRecorder::new().record(target);
}
