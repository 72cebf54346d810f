//! Case Input Record value object

use super::schema::CaseSchema;
use super::validation::{FieldIssue, validate_field};
use serde::Serialize;
use std::collections::BTreeMap;

/// Separator between paragraphs of multi-paragraph field values
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Form field values keyed by field identifier (Value Object)
///
/// Built once from the current form state at submit time and never mutated
/// afterwards. Field order is the order in which fields were first seen; a
/// repeated key keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseInputRecord {
    fields: Vec<(String, String)>,
}

impl CaseInputRecord {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => fields.push((key, value)),
            }
        }
        Self { fields }
    }

    /// Return a copy where every key in `overrides` takes the override value.
    ///
    /// Keys not yet present are appended in the overrides' order.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, String>) -> Self {
        Self::from_pairs(
            self.fields
                .iter()
                .cloned()
                .chain(overrides.iter().map(|(k, v)| (k.clone(), v.clone()))),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pairs suitable for a form-encoded request body
    pub fn as_form_pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every schema field, returning all issues found
    ///
    /// A schema key absent from the record is checked as an empty value.
    pub fn validate(&self, schema: CaseSchema) -> Vec<FieldIssue> {
        schema
            .field_keys()
            .iter()
            .filter_map(|key| validate_field(schema, key, self.get(key).unwrap_or("")).err())
            .collect()
    }
}
