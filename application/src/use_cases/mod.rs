//! Use cases
//!
//! Application-level operations that drive the drafting page through its ports.

pub mod autofill;
pub mod export_document;
pub(crate) mod shared;
pub mod submit_case;

#[cfg(test)]
pub(crate) mod test_support;

pub use shared::SetupError;
