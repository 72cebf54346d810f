//! Submission tokens

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier of one form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SubmissionToken(u64);

impl SubmissionToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tokens and remembers the most recent one
///
/// Only the holder of the latest token may render its response.
#[derive(Debug, Default)]
pub struct SubmissionSequence {
    latest: AtomicU64,
}

impl SubmissionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token newer than every token issued before
    pub fn issue(&self) -> SubmissionToken {
        SubmissionToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: SubmissionToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    pub fn latest(&self) -> Option<SubmissionToken> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(SubmissionToken(n)),
        }
    }
}
