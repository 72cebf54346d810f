//! Submission lifecycle: tokens, states and outcomes.

pub mod outcome;
pub mod state;
pub mod token;
