//! Clipboard port

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard available: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    #[error("Nothing to copy: element '{0}' not found")]
    MissingSource(String),
}

/// System clipboard
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
