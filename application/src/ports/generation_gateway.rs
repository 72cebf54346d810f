//! Generation gateway port
//!
//! Defines the single call the submission flow makes to the document
//! generation endpoint.

use async_trait::async_trait;
use drafter_domain::{CaseInputRecord, GenerationResult};
use thiserror::Error;

/// Errors that can occur while calling the generation endpoint
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The call was rejected before a response arrived (connectivity, DNS, TLS)
    #[error("{0}")]
    Transport(String),

    /// A response arrived but is not a Generation Result
    #[error("Resposta inválida do servidor: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }
}

/// Gateway to the document generation endpoint
///
/// Implementations issue exactly one request per call, apply no timeout of
/// their own and never retry.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    async fn generate(&self, record: &CaseInputRecord) -> Result<GenerationResult, GatewayError>;
}
