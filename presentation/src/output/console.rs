//! Console output formatter for generation results

use crate::output::formatter::OutputFormatter;
use crate::output::snapshot::ResultSnapshot;
use colored::Colorize;
use drafter_application::AutofillReport;
use drafter_domain::FieldIssue;
use serde_json::{Map, Value};

/// Formats rendered results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Every view under its tab title, error banner first
    pub fn format_text(snapshot: &ResultSnapshot) -> String {
        let mut output = String::new();

        if let Some(error) = &snapshot.error {
            output.push_str(&format!("{} {}\n", "Erro:".red().bold(), error.red()));
        }

        for view in &snapshot.views {
            output.push_str(&Self::section_header(view.tab.title()));
            output.push('\n');
            output.push_str(&view.text);
            output.push('\n');
        }

        output
    }

    /// Container markup, one HTML comment naming each container
    pub fn format_html(snapshot: &ResultSnapshot) -> String {
        let mut output = String::new();
        if let Some(error) = &snapshot.error {
            output.push_str(&format!("<!-- error: {} -->\n", error.replace("--", "- -")));
        }
        for view in &snapshot.views {
            output.push_str(&format!("<!-- {} -->\n{}\n", view.tab.id(), view.html));
        }
        output
    }

    /// Tab id to text, plus `error` when the banner is showing
    pub fn format_json(snapshot: &ResultSnapshot) -> String {
        let mut map = Map::new();
        for view in &snapshot.views {
            map.insert(view.tab.id().to_string(), Value::String(view.text.clone()));
        }
        if let Some(error) = &snapshot.error {
            map.insert("error".to_string(), Value::String(error.clone()));
        }
        serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_else(|_| "{}".to_string())
    }

    /// Field validation warnings, one per line
    pub fn format_issues(issues: &[FieldIssue]) -> String {
        issues
            .iter()
            .map(|issue| format!("{} {}", "warning:".yellow().bold(), issue))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Summary of an autofill run
    pub fn format_autofill(report: &AutofillReport) -> String {
        let mut output = format!(
            "{} {} campo(s) preenchido(s)",
            "Exemplo:".cyan().bold(),
            report.filled.len()
        );
        if !report.missing.is_empty() {
            output.push_str(&format!(
                "\n  {} {}",
                "campos não encontrados:".yellow(),
                report.missing.join(", ")
            ));
        }
        if !report.unmatched.is_empty() {
            output.push_str(&format!(
                "\n  {} {}",
                "sem opção correspondente:".yellow(),
                report.unmatched.join(", ")
            ));
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_text(&self, snapshot: &ResultSnapshot) -> String {
        Self::format_text(snapshot)
    }

    fn format_html(&self, snapshot: &ResultSnapshot) -> String {
        Self::format_html(snapshot)
    }

    fn format_json(&self, snapshot: &ResultSnapshot) -> String {
        Self::format_json(snapshot)
    }
}
