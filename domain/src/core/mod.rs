//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`text`] - text helpers shared by logging and rendering

pub mod error;
pub mod text;
