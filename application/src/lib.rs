//! Application layer for legal-drafter
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AutofillSettings, ClipboardSettings, DEFAULT_CONFIRM_DURATION, PageLayout};
pub use ports::{
    clipboard::{ClipboardError, ClipboardPort},
    generation_gateway::{GatewayError, GenerationGateway},
    page::{FieldEvent, FieldKind, PagePort, SelectOption},
    renderer::ResultRenderer,
    submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger},
    tab_widget::TabWidgetPort,
};
pub use use_cases::SetupError;
pub use use_cases::autofill::{AutofillController, AutofillReport};
pub use use_cases::export_document::{COPY_FAILED_MESSAGE, ClipboardExport};
pub use use_cases::submit_case::SubmissionOrchestrator;
