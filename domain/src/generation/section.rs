//! Structured section normalization
//!
//! The endpoint sends structured sections either as JSON objects or as
//! strings holding JSON. Both are decoded here, once, so renderers only ever
//! see a typed payload or a malformed marker.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A structured section of a Generation Result after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum SectionPayload<T> {
    Parsed(T),
    Malformed { reason: String },
}

impl<T: DeserializeOwned> SectionPayload<T> {
    /// Decode an object, or a string containing the object's JSON encoding
    pub fn from_value(value: Option<Value>) -> Self {
        let result = match value {
            None | Some(Value::Null) => {
                return SectionPayload::Malformed {
                    reason: "section missing".to_string(),
                };
            }
            Some(Value::String(encoded)) => serde_json::from_str::<T>(&encoded),
            Some(other) => serde_json::from_value::<T>(other),
        };
        match result {
            Ok(payload) => SectionPayload::Parsed(payload),
            Err(e) => SectionPayload::Malformed {
                reason: e.to_string(),
            },
        }
    }
}

impl<T> SectionPayload<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            SectionPayload::Parsed(payload) => Some(payload),
            SectionPayload::Malformed { .. } => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, SectionPayload::Malformed { .. })
    }
}
