//! Autofill use case.
//!
//! Writes the canned example record into the drafting form. Every written
//! field gets the same notifications a user edit would produce, so the page's
//! own listeners (validation, counters) observe the new value.

use crate::config::AutofillSettings;
use crate::ports::page::{FieldEvent, FieldKind, PagePort, SelectOption};
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use crate::use_cases::shared::SetupError;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What one autofill run did, field by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutofillReport {
    /// Fields that received their canned value
    pub filled: Vec<String>,
    /// Canned keys with no matching field on the page
    pub missing: Vec<String>,
    /// Select fields with no option matching the canned value
    pub unmatched: Vec<String>,
}

impl AutofillReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unmatched.is_empty()
    }
}

/// Autofill controller bound to its trigger control.
pub struct AutofillController {
    page: Arc<dyn PagePort>,
    settings: AutofillSettings,
    logger: Arc<dyn SubmissionLogger>,
}

impl AutofillController {
    /// Bind to the page.
    ///
    /// Fails when the trigger control is absent: that page variant has no
    /// example feature and nothing is bound.
    pub fn setup(page: Arc<dyn PagePort>, settings: AutofillSettings) -> Result<Self, SetupError> {
        if !page.has_element(&settings.trigger_id) {
            error!(trigger = %settings.trigger_id, "Example autofill trigger not found");
            return Err(SetupError::MissingElements(vec![settings.trigger_id]));
        }
        debug!(
            trigger = %settings.trigger_id,
            schema = %settings.schema,
            "Autofill bound"
        );
        Ok(Self {
            page,
            settings,
            logger: Arc::new(NoSubmissionLogger),
        })
    }

    /// Create with a submission logger.
    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn settings(&self) -> &AutofillSettings {
        &self.settings
    }

    /// Run the autofill, as if the trigger was clicked.
    pub fn fill(&self) -> AutofillReport {
        info!(schema = %self.settings.schema, "Filling form with example case");
        let mut report = AutofillReport::default();

        for (key, value) in self.settings.record.iter() {
            match self.page.field_kind(key) {
                None => {
                    warn!(field = key, "Field not found");
                    report.missing.push(key.to_string());
                }
                Some(FieldKind::Select) => {
                    let options = self.page.select_options(key);
                    let Some(option) = choose_option(&options, value) else {
                        warn!(field = key, value, "No option matches example value");
                        report.unmatched.push(key.to_string());
                        continue;
                    };
                    self.page.set_field_value(key, &option.value);
                    self.page.dispatch_field_event(key, FieldEvent::Change);
                    self.page.dispatch_field_event(key, FieldEvent::Input);
                    self.page.set_invalid_mark(key, false);
                    report.filled.push(key.to_string());
                }
                Some(_) => {
                    self.page.set_field_value(key, value);
                    self.page.dispatch_field_event(key, FieldEvent::Input);
                    self.page.set_invalid_mark(key, false);
                    report.filled.push(key.to_string());
                }
            }
        }

        debug!(
            filled = report.filled.len(),
            missing = report.missing.len(),
            unmatched = report.unmatched.len(),
            "Autofill finished"
        );
        self.logger.log(SubmissionEvent::new(
            "autofill_applied",
            json!({
                "schema": self.settings.schema.as_str(),
                "filled": report.filled,
                "missing": report.missing,
                "unmatched": report.unmatched,
            }),
        ));
        report
    }
}

/// Option for a canned select value: exact value first, then visible text
/// containing the value or contained in it.
fn choose_option<'a>(options: &'a [SelectOption], wanted: &str) -> Option<&'a SelectOption> {
    let wanted = wanted.trim();
    if wanted.is_empty() {
        return None;
    }
    options.iter().find(|o| o.value == wanted).or_else(|| {
        options.iter().find(|o| {
            let text = o.text.trim();
            !text.is_empty() && (text.contains(wanted) || wanted.contains(text))
        })
    })
}
