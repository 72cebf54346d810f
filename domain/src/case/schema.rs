//! Case field schemas
//!
//! Two field-key schemes exist for the drafting form. The long-form scheme is
//! canonical; the short-form scheme is kept selectable until every deployed
//! endpoint is known to accept the long form.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length and content rule applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Minimum length in characters after trimming
    pub min_chars: usize,
    /// Maximum length in characters after trimming
    pub max_chars: usize,
    /// Whether the field is a choice list rather than free text
    pub choice: bool,
}

/// Minimum length of multi-paragraph free-text fields
pub const MIN_TEXT_LENGTH: usize = 50;

/// Maximum length of any free-text field
pub const MAX_TEXT_LENGTH: usize = 5000;

const CHOICE: FieldRule = FieldRule {
    min_chars: 1,
    max_chars: 200,
    choice: true,
};

const FREE_TEXT: FieldRule = FieldRule {
    min_chars: MIN_TEXT_LENGTH,
    max_chars: MAX_TEXT_LENGTH,
    choice: false,
};

const PARTY_NAME: FieldRule = FieldRule {
    min_chars: 3,
    max_chars: MAX_TEXT_LENGTH,
    choice: false,
};

/// Field-key scheme of a Case Input Record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSchema {
    /// `case_type, parties, facts, legal_grounds, requests`
    #[default]
    #[serde(alias = "long-form")]
    Long,
    /// `tipo_acao, autor, reu, fatos, fundamentacao, pedidos`
    #[serde(alias = "short-form")]
    Short,
}

impl CaseSchema {
    /// Field identifiers in form order
    pub fn field_keys(&self) -> &'static [&'static str] {
        match self {
            CaseSchema::Long => &["case_type", "parties", "facts", "legal_grounds", "requests"],
            CaseSchema::Short => &["tipo_acao", "autor", "reu", "fatos", "fundamentacao", "pedidos"],
        }
    }

    /// Identifier of the field holding the kind of legal document
    pub fn case_type_key(&self) -> &'static str {
        match self {
            CaseSchema::Long => "case_type",
            CaseSchema::Short => "tipo_acao",
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.field_keys().contains(&key)
    }

    /// Validation rule for a field of this schema
    pub fn rule(&self, key: &str) -> Option<FieldRule> {
        if !self.contains(key) {
            return None;
        }
        if key == self.case_type_key() {
            return Some(CHOICE);
        }
        match key {
            "autor" | "reu" => Some(PARTY_NAME),
            _ => Some(FREE_TEXT),
        }
    }

    /// Human-readable field label, as shown next to the form control
    pub fn label(&self, key: &str) -> Option<&'static str> {
        let label = match key {
            "case_type" | "tipo_acao" => "Tipo de Peça",
            "parties" => "Partes Envolvidas",
            "autor" => "Autor",
            "reu" => "Réu",
            "facts" | "fatos" => "Fatos",
            "legal_grounds" | "fundamentacao" => "Fundamentação Jurídica",
            "requests" | "pedidos" => "Pedidos",
            _ => return None,
        };
        self.contains(key).then_some(label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseSchema::Long => "long",
            CaseSchema::Short => "short",
        }
    }
}

impl fmt::Display for CaseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseSchema {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "long-form" => Ok(CaseSchema::Long),
            "short" | "short-form" => Ok(CaseSchema::Short),
            other => Err(DomainError::UnknownSchema(other.to_string())),
        }
    }
}

/// Document kinds offered by the case-type select of the form
pub const CASE_TYPE_OPTIONS: &[&str] = &[
    "Petição Inicial",
    "Contestação",
    "Recurso",
    "Agravo",
    "Embargos",
    "Ação de Indenização por Danos Materiais e Morais",
];
