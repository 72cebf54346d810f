//! Tab widget port
//!
//! Tab switching belongs to the UI toolkit; the controllers only ask for a
//! tab to be shown.

pub trait TabWidgetPort: Send + Sync {
    /// Show the tab with this identifier; returns `false` if no such tab exists
    fn activate(&self, tab_id: &str) -> bool;

    /// Identifier of the currently shown tab
    fn active(&self) -> Option<String>;
}
