//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown case schema: {0}")]
    UnknownSchema(String),

    #[error("Unknown result tab: {0}")]
    UnknownTab(String),

    #[error("Generation result is not a JSON object")]
    NotAnObject,

    #[error("Invalid generation result: {0}")]
    InvalidResult(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl DomainError {
    /// Whether the error comes from a malformed server payload
    pub fn is_payload_error(&self) -> bool {
        matches!(self, DomainError::NotAnObject | DomainError::InvalidResult(_))
    }
}
