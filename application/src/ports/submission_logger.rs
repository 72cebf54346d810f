//! Port for structured submission logging.
//!
//! Records each submission's lifecycle (start, outcome) and autofill runs to
//! a machine-readable log. This is separate from `tracing` diagnostics.

use drafter_domain::SubmissionToken;
use serde_json::Value;

/// A structured submission event.
pub struct SubmissionEvent {
    /// Event type identifier (e.g. "submission_started", "submission_failed").
    pub event_type: &'static str,
    /// Submission the event belongs to; autofill runs have none
    pub token: Option<SubmissionToken>,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SubmissionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            token: None,
            payload,
        }
    }

    pub fn with_token(mut self, token: SubmissionToken) -> Self {
        self.token = Some(token);
        self
    }
}

/// Port for logging submission events.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// write errors.
pub trait SubmissionLogger: Send + Sync {
    fn log(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn log(&self, _event: SubmissionEvent) {}
}
