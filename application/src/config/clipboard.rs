//! Clipboard export settings.

use std::time::Duration;

/// Default time the confirmation label stays on the copy control
pub const DEFAULT_CONFIRM_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSettings {
    /// Control the export is bound to
    pub control_id: String,
    /// Label shown on the control after a successful copy
    pub confirm_label: String,
    pub confirm_duration: Duration,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            control_id: "copyButton".to_string(),
            confirm_label: "✓ Copiado!".to_string(),
            confirm_duration: DEFAULT_CONFIRM_DURATION,
        }
    }
}

impl ClipboardSettings {
    pub fn with_confirm_duration(mut self, duration: Duration) -> Self {
        self.confirm_duration = duration;
        self
    }
}
