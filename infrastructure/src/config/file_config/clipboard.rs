//! Clipboard configuration from TOML (`[clipboard]` section)

use drafter_application::ClipboardSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw clipboard configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClipboardConfig {
    pub control_id: String,
    pub confirm_label: String,
    /// How long the confirmation label stays, in milliseconds
    pub confirm_ms: u64,
}

impl Default for FileClipboardConfig {
    fn default() -> Self {
        let settings = ClipboardSettings::default();
        Self {
            control_id: settings.control_id,
            confirm_label: settings.confirm_label,
            confirm_ms: settings.confirm_duration.as_millis() as u64,
        }
    }
}

impl FileClipboardConfig {
    pub fn to_clipboard_settings(&self) -> ClipboardSettings {
        ClipboardSettings {
            control_id: self.control_id.clone(),
            confirm_label: self.confirm_label.clone(),
            confirm_duration: Duration::from_millis(self.confirm_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings() {
        let config = FileClipboardConfig::default();
        assert_eq!(config.confirm_ms, 2000);
        assert_eq!(config.to_clipboard_settings(), ClipboardSettings::default());
    }
}
