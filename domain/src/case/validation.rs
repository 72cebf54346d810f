//! Field validation for Case Input Records
//!
//! Mirrors the checks the generation endpoint applies, so a form can mark a
//! field invalid before anything is sent.

use super::schema::CaseSchema;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static FORBIDDEN_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script|javascript:|on\w+\s*=").expect("static pattern is valid")
});

/// Reason a field value was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    #[error("O campo {label} não pode estar vazio")]
    Empty { field: String, label: String },

    #[error("O campo {label} deve ter pelo menos {min} caracteres")]
    TooShort {
        field: String,
        label: String,
        min: usize,
    },

    #[error("O campo {label} não pode ter mais que {max} caracteres")]
    TooLong {
        field: String,
        label: String,
        max: usize,
    },

    #[error("O campo {label} contém caracteres não permitidos")]
    ForbiddenContent { field: String, label: String },

    #[error("Campo desconhecido: {field}")]
    UnknownField { field: String },
}

impl FieldIssue {
    /// Identifier of the offending field
    pub fn field(&self) -> &str {
        match self {
            FieldIssue::Empty { field, .. }
            | FieldIssue::TooShort { field, .. }
            | FieldIssue::TooLong { field, .. }
            | FieldIssue::ForbiddenContent { field, .. }
            | FieldIssue::UnknownField { field } => field,
        }
    }
}

/// Validate one field value against the schema's rule for it
pub fn validate_field(schema: CaseSchema, key: &str, value: &str) -> Result<(), FieldIssue> {
    let Some(rule) = schema.rule(key) else {
        return Err(FieldIssue::UnknownField {
            field: key.to_string(),
        });
    };
    let field = key.to_string();
    let label = schema.label(key).unwrap_or(key).to_string();

    let text = value.trim();
    if text.is_empty() {
        return Err(FieldIssue::Empty { field, label });
    }

    let len = text.chars().count();
    if len < rule.min_chars {
        return Err(FieldIssue::TooShort {
            field,
            label,
            min: rule.min_chars,
        });
    }
    if len > rule.max_chars {
        return Err(FieldIssue::TooLong {
            field,
            label,
            max: rule.max_chars,
        });
    }

    if FORBIDDEN_CONTENT.is_match(text) {
        return Err(FieldIssue::ForbiddenContent { field, label });
    }

    Ok(())
}
