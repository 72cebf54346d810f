//! Configuration file loading for legal-drafter
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DRAFTER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./drafter.toml` or `./.drafter.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/legal-drafter/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_PATH,
    FileAutofillConfig, FileClipboardConfig, FileConfig, FileEndpointConfig, FileLoggingConfig,
    FilePageConfig, Severity,
};
pub use loader::ConfigLoader;
