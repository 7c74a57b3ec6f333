//! Port for structured advisory logging.
//!
//! Defines the [`AdvisoryLogger`] trait for recording one event per advisory
//! call (task, provider, how the result was obtained) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable audit trail (JSONL).

use serde_json::Value;

/// A structured advisory event for logging.
pub struct AdvisoryEvent {
    /// Event type identifier (e.g., "advisory_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AdvisoryEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging advisory events.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait AdvisoryLogger: Send + Sync {
    fn log(&self, event: AdvisoryEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAdvisoryLogger;

impl AdvisoryLogger for NoAdvisoryLogger {
    fn log(&self, _event: AdvisoryEvent) {}
}
