//! Generation Result: the endpoint's response, success or error

use super::analysis::AnalysisPayload;
use super::review::ReviewPayload;
use super::section::SectionPayload;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of `status` that marks a business-level failure
pub const ERROR_STATUS: &str = "error";

/// Response body as sent by the endpoint, before normalization
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGenerationResult {
    status: Option<String>,
    error: Option<Value>,
    document: Option<Value>,
    analysis: Option<Value>,
    basis: Option<Value>,
    review: Option<Value>,
}

/// The four sections of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSections {
    pub document: String,
    pub analysis: SectionPayload<AnalysisPayload>,
    pub basis: String,
    pub review: SectionPayload<ReviewPayload>,
}

/// Normalized Generation Result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationResult {
    #[serde(rename = "ok")]
    Success(Box<GeneratedSections>),
    Error { message: String },
}

impl GenerationResult {
    /// Normalize a decoded response body
    ///
    /// Fails only when the body is not a JSON object; malformed structured
    /// sections are kept as [`SectionPayload::Malformed`].
    pub fn from_json(value: Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::NotAnObject);
        }
        let raw: RawGenerationResult = serde_json::from_value(value)
            .map_err(|e| DomainError::InvalidResult(e.to_string()))?;

        if raw.status.as_deref() == Some(ERROR_STATUS) {
            return Ok(GenerationResult::Error {
                message: raw.error.map(text_of).unwrap_or_default(),
            });
        }

        Ok(GenerationResult::Success(Box::new(GeneratedSections {
            document: raw.document.map(text_of).unwrap_or_default(),
            analysis: SectionPayload::from_value(raw.analysis),
            basis: raw.basis.map(text_of).unwrap_or_default(),
            review: SectionPayload::from_value(raw.review),
        })))
    }

    /// Decode and normalize a raw response body
    pub fn from_body(body: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| DomainError::InvalidResult(e.to_string()))?;
        Self::from_json(value)
    }
}

/// Plain text of a scalar section; `null` is empty
fn text_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_status() {
        let result =
            GenerationResult::from_json(json!({"status": "error", "error": "Falha na API"}))
                .unwrap();
        assert_eq!(
            result,
            GenerationResult::Error {
                message: "Falha na API".to_string()
            }
        );
    }

    #[test]
    fn test_error_status_without_message() {
        let result = GenerationResult::from_json(json!({"status": "error"})).unwrap();
        assert_eq!(
            result,
            GenerationResult::Error {
                message: String::new()
            }
        );
    }

    #[test]
    fn test_success_without_status() {
        let result = GenerationResult::from_json(json!({
            "document": "Texto.",
            "analysis": {
                "pontos_fortes": ["a"],
                "pontos_fracos": [],
                "riscos": [],
                "oportunidades": [],
                "sugestoes_melhoria": []
            },
            "basis": "Base.",
            "review": {"estrutura": "ok"}
        }))
        .unwrap();

        let GenerationResult::Success(sections) = result else {
            panic!("expected success");
        };
        assert_eq!(sections.document, "Texto.");
        assert_eq!(sections.basis, "Base.");
        assert_eq!(
            sections.analysis.parsed().unwrap().pontos_fortes,
            vec!["a".to_string()]
        );
        assert_eq!(
            sections.review.parsed().unwrap().estrutura.as_deref(),
            Some("ok")
        );
    }

    #[test]
    fn test_ok_status_with_string_sections() {
        let analysis = json!({
            "pontos_fortes": [],
            "pontos_fracos": [],
            "riscos": [],
            "oportunidades": [],
            "sugestoes_melhoria": ["s"]
        })
        .to_string();
        let result = GenerationResult::from_json(json!({
            "status": "ok",
            "document": "d",
            "analysis": analysis,
            "basis": "b",
            "review": "{\"clareza\": \"boa\"}"
        }))
        .unwrap();

        let GenerationResult::Success(sections) = result else {
            panic!("expected success");
        };
        assert!(!sections.analysis.is_malformed());
        assert!(!sections.review.is_malformed());
    }

    #[test]
    fn test_missing_scalar_sections_are_empty() {
        let result = GenerationResult::from_json(json!({"analysis": "{bad"})).unwrap();
        let GenerationResult::Success(sections) = result else {
            panic!("expected success");
        };
        assert_eq!(sections.document, "");
        assert_eq!(sections.basis, "");
        assert!(sections.analysis.is_malformed());
        assert!(sections.review.is_malformed());
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(
            GenerationResult::from_json(json!([1])),
            Err(DomainError::NotAnObject)
        );
        assert!(GenerationResult::from_body("<html>").is_err());
    }

    #[test]
    fn test_non_string_status_is_invalid() {
        let err = GenerationResult::from_json(json!({"status": 1})).unwrap_err();
        assert!(err.is_payload_error());
    }
}
