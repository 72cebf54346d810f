//! Result renderer port
//!
//! Converts each section of a Generation Result into page markup. Each method
//! is one independent render pass.

use drafter_domain::{AnalysisPayload, ReviewPayload, SectionPayload};

pub trait ResultRenderer: Send + Sync {
    fn render_document(&self, document: &str) -> String;

    /// Malformed payloads render a fallback message, never an error
    fn render_analysis(&self, analysis: &SectionPayload<AnalysisPayload>) -> String;

    fn render_basis(&self, basis: &str) -> String;

    /// Malformed payloads render a fallback message, never an error
    fn render_review(&self, review: &SectionPayload<ReviewPayload>) -> String;

    /// Dismissible error banner
    fn render_error_banner(&self, message: &str) -> String;
}
