//! Autofill configuration from TOML (`[autofill]` section)

use drafter_application::AutofillSettings;
use drafter_domain::CaseSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw autofill configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAutofillConfig {
    pub trigger_id: String,
    /// Form variant the canned record targets
    pub schema: CaseSchema,
    /// Per-field replacements for the canned values
    pub values: BTreeMap<String, String>,
}

impl Default for FileAutofillConfig {
    fn default() -> Self {
        let settings = AutofillSettings::default();
        Self {
            trigger_id: settings.trigger_id,
            schema: settings.schema,
            values: BTreeMap::new(),
        }
    }
}

impl FileAutofillConfig {
    pub fn to_autofill_settings(&self) -> AutofillSettings {
        AutofillSettings::for_schema(self.schema)
            .with_trigger_id(self.trigger_id.clone())
            .with_overrides(&self.values)
    }

    /// Override keys the selected schema does not define
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !self.schema.contains(key))
            .collect()
    }
}
