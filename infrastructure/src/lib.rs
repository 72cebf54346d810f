//! Infrastructure layer for legal-drafter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clipboard;
pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use clipboard::SystemClipboard;
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, ConfigValidationError, FileConfig,
    FileEndpointConfig, FileLoggingConfig, Severity,
};
pub use http::HttpGenerationGateway;
pub use logging::JsonlSubmissionLogger;
