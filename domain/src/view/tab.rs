//! Result tab identifiers

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four result views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultTab {
    Document,
    Analysis,
    Basis,
    Review,
}

impl ResultTab {
    /// All tabs, in display order
    pub const ALL: [ResultTab; 4] = [
        ResultTab::Document,
        ResultTab::Analysis,
        ResultTab::Basis,
        ResultTab::Review,
    ];

    /// Tab identifier understood by the tab widget
    pub fn id(&self) -> &'static str {
        match self {
            ResultTab::Document => "document",
            ResultTab::Analysis => "analysis",
            ResultTab::Basis => "basis",
            ResultTab::Review => "review",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResultTab::Document => "Documento",
            ResultTab::Analysis => "Análise",
            ResultTab::Basis => "Fundamentação",
            ResultTab::Review => "Revisão",
        }
    }
}

impl fmt::Display for ResultTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ResultTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultTab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for tab in ResultTab::ALL {
            assert_eq!(tab.id().parse::<ResultTab>().unwrap(), tab);
        }
        assert_eq!("BASIS".parse::<ResultTab>().unwrap(), ResultTab::Basis);
        assert!("summary".parse::<ResultTab>().is_err());
    }

    #[test]
    fn test_document_is_first() {
        assert_eq!(ResultTab::ALL[0], ResultTab::Document);
        assert_eq!(ResultTab::Document.to_string(), "document");
    }
}
