//! Case input: the drafting form's field values.
//!
//! - [`schema::CaseSchema`] - the two field-key schemes (long-form is canonical)
//! - [`record::CaseInputRecord`] - immutable field values of one submission
//! - [`validation`] - per-field length and content checks
//! - [`example`] - canned records used by autofill

pub mod example;
pub mod record;
pub mod schema;
pub mod validation;
