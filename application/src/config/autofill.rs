//! Autofill settings.

use drafter_domain::{CaseInputRecord, CaseSchema, example_case};
use std::collections::BTreeMap;

/// What the autofill trigger writes, and where the trigger lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutofillSettings {
    /// Id of the control that triggers autofill
    pub trigger_id: String,
    pub schema: CaseSchema,
    /// Canned record written into the form
    pub record: CaseInputRecord,
}

impl Default for AutofillSettings {
    fn default() -> Self {
        Self::for_schema(CaseSchema::default())
    }
}

impl AutofillSettings {
    /// Settings with the built-in example case of `schema`
    pub fn for_schema(schema: CaseSchema) -> Self {
        Self {
            trigger_id: "fillExample".to_string(),
            schema,
            record: example_case(schema),
        }
    }

    pub fn with_trigger_id(mut self, trigger_id: impl Into<String>) -> Self {
        self.trigger_id = trigger_id.into();
        self
    }

    /// Replace canned values key by key
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        self.record = self.record.with_overrides(overrides);
        self
    }
}
