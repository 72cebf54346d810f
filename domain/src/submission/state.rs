//! Submission state machine

use crate::core::error::DomainError;
use serde::Serialize;
use std::fmt;

/// State of the submission controller
///
/// ```text
/// Idle -> Submitting -> Rendering -> Idle
///                    \-> Failed   -> Idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Rendering,
    Failed,
}

impl SubmissionState {
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Submitting)
                | (Submitting, Rendering)
                | (Submitting, Failed)
                | (Rendering, Idle)
                | (Failed, Idle)
                // a submission dropped mid-call returns to Idle without resolving
                | (Submitting, Idle)
        )
    }

    pub fn transition(self, next: SubmissionState) -> Result<SubmissionState, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Rendering => "rendering",
            SubmissionState::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
