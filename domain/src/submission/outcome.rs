//! Result of one submission as seen by the caller

use super::token::SubmissionToken;
use crate::core::text::is_blank;
use serde::Serialize;

/// Message shown when a failure carries no text of its own
pub const GENERIC_ERROR_MESSAGE: &str = "Ocorreu um erro ao processar sua solicitação.";

/// Which boundary a failed submission broke at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The network call itself was rejected
    Transport,
    /// The response body was not a Generation Result
    MalformedResponse,
    /// The endpoint answered with an error status
    Business,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// All four sections rendered and the document tab activated
    Rendered { token: SubmissionToken },
    /// An error banner was shown
    Failed {
        token: SubmissionToken,
        kind: FailureKind,
        message: String,
    },
    /// A newer submission started before this one resolved; nothing rendered
    Superseded { token: SubmissionToken },
}

impl SubmissionOutcome {
    pub fn token(&self) -> SubmissionToken {
        match self {
            SubmissionOutcome::Rendered { token }
            | SubmissionOutcome::Failed { token, .. }
            | SubmissionOutcome::Superseded { token } => *token,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmissionOutcome::Rendered { .. })
    }
}

/// Banner text for a failure message, falling back to the generic one
pub fn banner_message(message: &str) -> &str {
    if is_blank(message) {
        GENERIC_ERROR_MESSAGE
    } else {
        message
    }
}
