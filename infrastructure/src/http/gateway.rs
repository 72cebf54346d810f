//! Generation gateway over HTTP.
//!
//! Posts the case fields form-encoded to the generation endpoint and
//! normalizes the JSON body into a [`GenerationResult`]. The HTTP status is
//! not interpreted: error responses carry their message in the body.

use async_trait::async_trait;
use drafter_application::ports::generation_gateway::{GatewayError, GenerationGateway};
use drafter_domain::{CaseInputRecord, GenerationResult};
use tracing::{debug, info, warn};

/// HTTP implementation of [`GenerationGateway`]
pub struct HttpGenerationGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpGenerationGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenerationGateway for HttpGenerationGateway {
    async fn generate(&self, record: &CaseInputRecord) -> Result<GenerationResult, GatewayError> {
        info!(url = %self.url, fields = record.len(), "POST generation request");

        let response = self
            .client
            .post(&self.url)
            .form(record.as_form_pairs())
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "Generation request failed");
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Generation response received");

        GenerationResult::from_body(&body).map_err(|e| {
            warn!(status = status.as_u16(), error = %e, "Response is not a generation result");
            GatewayError::MalformedResponse(e.to_string())
        })
    }
}
