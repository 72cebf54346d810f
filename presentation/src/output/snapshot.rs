//! Rendered results captured from the page for printing

use crate::page::inner_text;
use drafter_application::PageLayout;
use drafter_application::ports::page::PagePort;
use drafter_domain::ResultTab;
use serde::Serialize;

/// One result container's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub tab: ResultTab,
    #[serde(skip)]
    pub html: String,
    pub text: String,
}

/// Result containers and error banner as they stand after a submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSnapshot {
    pub views: Vec<RenderedView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultSnapshot {
    /// Read the given tabs' containers and the error banner from the page
    pub fn capture(page: &dyn PagePort, layout: &PageLayout, tabs: &[ResultTab]) -> Self {
        let views = tabs
            .iter()
            .map(|tab| {
                let html = page.inner_html(layout.container_id(*tab)).unwrap_or_default();
                RenderedView {
                    tab: *tab,
                    text: inner_text(&html),
                    html,
                }
            })
            .collect();
        let error = page
            .inner_text(&layout.error_container_id)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Self { views, error }
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.views.iter().all(|view| view.html.is_empty())
    }
}
