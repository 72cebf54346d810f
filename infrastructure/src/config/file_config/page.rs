//! Page element ids from TOML (`[page]` section)

use drafter_application::PageLayout;
use serde::{Deserialize, Serialize};

/// Raw page configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePageConfig {
    pub form_id: String,
    pub document_tab_id: String,
    pub document_tab_target: String,
    pub loading_indicator_id: String,
    pub error_container_id: String,
    pub document_container_id: String,
    pub analysis_container_id: String,
    pub basis_container_id: String,
    pub review_container_id: String,
}

impl Default for FilePageConfig {
    fn default() -> Self {
        PageLayout::default().into()
    }
}

impl From<PageLayout> for FilePageConfig {
    fn from(layout: PageLayout) -> Self {
        Self {
            form_id: layout.form_id,
            document_tab_id: layout.document_tab_id,
            document_tab_target: layout.document_tab_target,
            loading_indicator_id: layout.loading_indicator_id,
            error_container_id: layout.error_container_id,
            document_container_id: layout.document_container_id,
            analysis_container_id: layout.analysis_container_id,
            basis_container_id: layout.basis_container_id,
            review_container_id: layout.review_container_id,
        }
    }
}

impl FilePageConfig {
    pub fn to_page_layout(&self) -> PageLayout {
        PageLayout {
            form_id: self.form_id.clone(),
            document_tab_id: self.document_tab_id.clone(),
            document_tab_target: self.document_tab_target.clone(),
            loading_indicator_id: self.loading_indicator_id.clone(),
            error_container_id: self.error_container_id.clone(),
            document_container_id: self.document_container_id.clone(),
            analysis_container_id: self.analysis_container_id.clone(),
            basis_container_id: self.basis_container_id.clone(),
            review_container_id: self.review_container_id.clone(),
        }
    }
}
