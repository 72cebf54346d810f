//! Document review payload

use serde::{Deserialize, Serialize};

/// Placeholder shown for review aspects the endpoint did not fill in
pub const NOT_AVAILABLE: &str = "Não disponível";

/// Review of the drafted document; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPayload {
    pub estrutura: Option<String>,
    pub clareza: Option<String>,
    pub coerencia: Option<String>,
    pub sugestoes_melhoria: Option<Vec<String>>,
}

impl ReviewPayload {
    /// Labeled aspects with the placeholder substituted for absent or empty values
    pub fn aspects(&self) -> [(&'static str, &str); 3] {
        [
            ("Estrutura", or_placeholder(&self.estrutura)),
            ("Clareza", or_placeholder(&self.clareza)),
            ("Coerência", or_placeholder(&self.coerencia)),
        ]
    }

    pub fn suggestions(&self) -> &[String] {
        self.sugestoes_melhoria.as_deref().unwrap_or(&[])
    }
}

fn or_placeholder(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
