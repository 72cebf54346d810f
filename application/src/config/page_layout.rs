//! Element identifiers of the drafting page.

use drafter_domain::ResultTab;
use serde::{Deserialize, Serialize};

/// Identifiers of the page elements the submission flow depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub form_id: String,
    /// Tab-widget control for the document view (must exist at setup)
    pub document_tab_id: String,
    /// Identifier passed to the tab widget after a successful render
    pub document_tab_target: String,
    pub loading_indicator_id: String,
    pub error_container_id: String,
    pub document_container_id: String,
    pub analysis_container_id: String,
    pub basis_container_id: String,
    pub review_container_id: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            form_id: "legalForm".to_string(),
            document_tab_id: "document-tab".to_string(),
            document_tab_target: ResultTab::Document.id().to_string(),
            loading_indicator_id: "loadingIndicator".to_string(),
            error_container_id: "errorContainer".to_string(),
            document_container_id: "documentContent".to_string(),
            analysis_container_id: "analysisContent".to_string(),
            basis_container_id: "basisContent".to_string(),
            review_container_id: "reviewContent".to_string(),
        }
    }
}

impl PageLayout {
    /// Container element that holds a tab's rendered view
    pub fn container_id(&self, tab: ResultTab) -> &str {
        match tab {
            ResultTab::Document => &self.document_container_id,
            ResultTab::Analysis => &self.analysis_container_id,
            ResultTab::Basis => &self.basis_container_id,
            ResultTab::Review => &self.review_container_id,
        }
    }

    /// Elements that must exist before the submit handler can be attached,
    /// as `(role, element id)` pairs
    pub fn required_elements(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("form", self.form_id.as_str()),
            ("documentTab", self.document_tab_id.as_str()),
            ("loadingIndicator", self.loading_indicator_id.as_str()),
            ("documentContent", self.document_container_id.as_str()),
            ("analysisContent", self.analysis_container_id.as_str()),
            ("basisContent", self.basis_container_id.as_str()),
            ("reviewContent", self.review_container_id.as_str()),
            ("errorContainer", self.error_container_id.as_str()),
        ]
    }

    /// All element ids, in `required_elements` order
    pub fn element_ids(&self) -> Vec<&str> {
        self.required_elements().into_iter().map(|(_, id)| id).collect()
    }
}
