//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application settings.

mod autofill;
mod clipboard;
mod endpoint;
mod logging;
mod page;

pub use autofill::FileAutofillConfig;
pub use clipboard::FileClipboardConfig;
pub use endpoint::{DEFAULT_BASE_URL, DEFAULT_PATH, FileEndpointConfig};
pub use logging::FileLoggingConfig;
pub use page::FilePageConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation endpoint
    pub endpoint: FileEndpointConfig,
    /// Element ids of the drafting page
    pub page: FilePageConfig,
    /// Example autofill
    pub autofill: FileAutofillConfig,
    /// Copy-to-clipboard control
    pub clipboard: FileClipboardConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    InvalidBaseUrl,
    EmptyEndpointPath,
    RelativeEndpointPath,
    ZeroConfirmDuration,
    DuplicateElementId { id: String },
    UnknownOverrideKey { key: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn error(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn warning(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

/// Configuration that cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Endpoint
        if reqwest::Url::parse(&self.endpoint.base_url).is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBaseUrl,
                format!("endpoint.base_url: '{}' is not a URL", self.endpoint.base_url),
            ));
        }
        let path = self.endpoint.path.trim();
        if path.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyEndpointPath,
                "endpoint.path: must not be empty".to_string(),
            ));
        } else if !path.starts_with('/') {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::RelativeEndpointPath,
                format!("endpoint.path: '{path}' has no leading '/', treating as '/{path}'"),
            ));
        }

        // 2. Clipboard confirmation
        if self.clipboard.confirm_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroConfirmDuration,
                "clipboard.confirm_ms: 0 hides the copy confirmation immediately".to_string(),
            ));
        }

        // 3. Element ids must be distinct
        let layout = self.page.to_page_layout();
        let mut seen = HashSet::new();
        let ids = layout
            .element_ids()
            .into_iter()
            .chain([self.autofill.trigger_id.as_str(), self.clipboard.control_id.as_str()]);
        for id in ids {
            if !seen.insert(id) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateElementId { id: id.to_string() },
                    format!("page: element id '{id}' is used for more than one element"),
                ));
            }
        }

        // 4. Autofill overrides
        for key in self.autofill.unknown_keys() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownOverrideKey {
                    key: key.to_string(),
                },
                format!(
                    "autofill.values.{key}: not a field of the {} form, it will be skipped",
                    self.autofill.schema
                ),
            ));
        }

        issues
    }

    /// Fail on the first class of issues the application cannot run with
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|issue| issue.message).collect(),
            ))
        }
    }
}
