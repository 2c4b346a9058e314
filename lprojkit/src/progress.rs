//! Progress reporting for long-running operations.
//!
//! Imports and deletes emit one message per phase and per touched file.
//! Callers decide what to do with them; the CLI prints them, tests collect
//! them, and [`NullProgress`] drops them.

/// Receives ordered human-readable progress messages.
pub trait ProgressSink {
    fn log(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn log(&self, _message: &str) {}
}

/// Any `Fn(&str)` closure works as a sink.
impl<F: Fn(&str)> ProgressSink for F {
    fn log(&self, message: &str) {
        self(message)
    }
}
