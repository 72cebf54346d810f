//! Domain layer for legal-drafter
//!
//! This crate contains the value objects and rules of the drafting flow.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Case Input Record**: the form's field values, captured once per submission
//! - **Generation Result**: the endpoint's answer, normalized into typed sections
//! - **Submission**: a token-tagged pass through the `Idle → Submitting → …` machine

pub mod case;
pub mod core;
pub mod generation;
pub mod submission;
pub mod view;

// Re-export commonly used types
pub use case::{
    example::example_case,
    record::{CaseInputRecord, PARAGRAPH_SEPARATOR},
    schema::{CASE_TYPE_OPTIONS, CaseSchema, FieldRule},
    validation::{FieldIssue, validate_field},
};
pub use core::error::DomainError;
pub use generation::{
    analysis::AnalysisPayload,
    result::{GeneratedSections, GenerationResult},
    review::{NOT_AVAILABLE, ReviewPayload},
    section::SectionPayload,
};
pub use submission::{
    outcome::{FailureKind, GENERIC_ERROR_MESSAGE, SubmissionOutcome, banner_message},
    state::SubmissionState,
    token::{SubmissionSequence, SubmissionToken},
};
pub use view::tab::ResultTab;
