//! Generation Result and its structured sections.
//!
//! Responses are normalized at the network boundary by
//! [`result::GenerationResult::from_json`]; nothing downstream looks at the
//! raw JSON again.

pub mod analysis;
pub mod result;
pub mod review;
pub mod section;
