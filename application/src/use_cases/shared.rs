//! Shared utilities for use cases.
//!
//! Contains the setup-time element check used by every controller that binds
//! to the page.

use crate::ports::page::PagePort;
use thiserror::Error;

/// A controller could not be attached to the page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Required elements not found: {}", .0.join(", "))]
    MissingElements(Vec<String>),
}

impl SetupError {
    pub fn missing(&self) -> &[String] {
        match self {
            SetupError::MissingElements(names) => names,
        }
    }
}

/// Roles of the `(role, id)` pairs whose element is absent from the page
pub(crate) fn missing_elements(page: &dyn PagePort, required: &[(&str, &str)]) -> Vec<String> {
    required
        .iter()
        .filter(|(_, id)| !page.has_element(id))
        .map(|(role, _)| role.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_lists_elements() {
        let error = SetupError::MissingElements(vec!["form".to_string(), "basisContent".to_string()]);
        assert_eq!(
            error.to_string(),
            "Required elements not found: form, basisContent"
        );
        assert_eq!(error.missing().len(), 2);
    }
}
