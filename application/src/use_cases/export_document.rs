//! Export Document use case.
//!
//! Copies the visible text of the generated document to the system clipboard
//! and briefly swaps the copy control's label for a confirmation.

use crate::config::ClipboardSettings;
use crate::ports::clipboard::{ClipboardError, ClipboardPort};
use crate::ports::page::PagePort;
use crate::use_cases::shared::SetupError;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Alert shown when the text could not be copied
pub const COPY_FAILED_MESSAGE: &str = "Erro ao copiar o texto. Por favor, tente novamente.";

/// Clipboard export bound to its copy control.
pub struct ClipboardExport {
    page: Arc<dyn PagePort>,
    clipboard: Arc<dyn ClipboardPort>,
    settings: ClipboardSettings,
    source_id: String,
    original_label: String,
}

impl ClipboardExport {
    /// Bind the copy control.
    ///
    /// The control's current label is remembered so it can be restored after
    /// every confirmation.
    pub fn bind(
        page: Arc<dyn PagePort>,
        clipboard: Arc<dyn ClipboardPort>,
        settings: ClipboardSettings,
        source_id: impl Into<String>,
    ) -> Result<Self, SetupError> {
        if !page.has_element(&settings.control_id) {
            error!(control = %settings.control_id, "Copy control not found");
            return Err(SetupError::MissingElements(vec![settings.control_id]));
        }
        let original_label = page.label(&settings.control_id).unwrap_or_default();

        Ok(Self {
            page,
            clipboard,
            settings,
            source_id: source_id.into(),
            original_label,
        })
    }

    pub fn settings(&self) -> &ClipboardSettings {
        &self.settings
    }

    /// Copy the source element's visible text.
    ///
    /// Returns the copied text. On failure the user is alerted and the label
    /// is left untouched.
    pub async fn copy(&self) -> Result<String, ClipboardError> {
        let result = self.write().await;
        match &result {
            Ok(text) => {
                info!(chars = text.chars().count(), "Document copied to clipboard");
                self.confirm().await;
            }
            Err(e) => {
                error!(error = %e, "Clipboard export failed");
                self.page.alert(COPY_FAILED_MESSAGE);
            }
        }
        result
    }

    async fn write(&self) -> Result<String, ClipboardError> {
        let text = self
            .page
            .inner_text(&self.source_id)
            .ok_or_else(|| ClipboardError::MissingSource(self.source_id.clone()))?;
        self.clipboard.write_text(&text).await?;
        Ok(text)
    }

    async fn confirm(&self) {
        let control = &self.settings.control_id;
        self.page.set_label(control, &self.settings.confirm_label);
        debug!(
            duration_ms = self.settings.confirm_duration.as_millis() as u64,
            "Showing copy confirmation"
        );
        tokio::time::sleep(self.settings.confirm_duration).await;
        self.page.set_label(control, &self.original_label);
    }
}
