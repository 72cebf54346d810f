//! Output formatter trait

use crate::output::snapshot::ResultSnapshot;

/// Trait for formatting rendered results
pub trait OutputFormatter {
    /// Plain text of each view under a heading
    fn format_text(&self, snapshot: &ResultSnapshot) -> String;

    /// Container markup as rendered
    fn format_html(&self, snapshot: &ResultSnapshot) -> String;

    /// JSON object of tab id to text
    fn format_json(&self, snapshot: &ResultSnapshot) -> String;
}
