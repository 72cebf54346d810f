//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving submission events
    pub submission_log: Option<PathBuf>,
    /// File receiving `tracing` diagnostics in addition to stderr
    pub file: Option<PathBuf>,
}
