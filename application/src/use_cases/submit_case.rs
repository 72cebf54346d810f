//! Submit Case use case.
//!
//! The submission orchestrator: takes one submit event through request
//! construction, the generation call, the four render passes and tab
//! activation, or through the error banner on failure.
//!
//! ```text
//! Idle -> Submitting -> Rendering -> Idle
//!                    \-> Failed   -> Idle
//! ```
//!
//! Every submission carries a [`SubmissionToken`]. When submissions overlap,
//! only the response of the most recent one is rendered; older responses are
//! dropped as [`SubmissionOutcome::Superseded`].

use crate::config::PageLayout;
use crate::ports::generation_gateway::{GatewayError, GenerationGateway};
use crate::ports::page::PagePort;
use crate::ports::renderer::ResultRenderer;
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use crate::ports::tab_widget::TabWidgetPort;
use crate::use_cases::shared::{SetupError, missing_elements};
use drafter_domain::core::text::preview;
use drafter_domain::{
    CaseInputRecord, FailureKind, GeneratedSections, GenerationResult, ResultTab, SectionPayload,
    SubmissionOutcome, SubmissionSequence, SubmissionState, SubmissionToken, banner_message,
};
use serde_json::json;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info, warn};

/// Submission orchestrator bound to the drafting form.
pub struct SubmissionOrchestrator {
    page: Arc<dyn PagePort>,
    tabs: Arc<dyn TabWidgetPort>,
    gateway: Arc<dyn GenerationGateway>,
    renderer: Arc<dyn ResultRenderer>,
    layout: PageLayout,
    sequence: SubmissionSequence,
    /// State of the most recent submission
    state: Mutex<SubmissionState>,
    logger: Arc<dyn SubmissionLogger>,
}

impl SubmissionOrchestrator {
    /// Bind to the page.
    ///
    /// Every element of the layout must exist; otherwise the missing ones are
    /// logged and no orchestrator is created.
    pub fn setup(
        page: Arc<dyn PagePort>,
        tabs: Arc<dyn TabWidgetPort>,
        gateway: Arc<dyn GenerationGateway>,
        renderer: Arc<dyn ResultRenderer>,
        layout: PageLayout,
    ) -> Result<Self, SetupError> {
        let missing = missing_elements(page.as_ref(), &layout.required_elements());
        if !missing.is_empty() {
            error!(missing = ?missing, "Required page elements not found");
            return Err(SetupError::MissingElements(missing));
        }

        Ok(Self {
            page,
            tabs,
            gateway,
            renderer,
            layout,
            sequence: SubmissionSequence::new(),
            state: Mutex::new(SubmissionState::Idle),
            logger: Arc::new(NoSubmissionLogger),
        })
    }

    /// Create with a submission logger.
    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// State of the most recent submission
    pub fn state(&self) -> SubmissionState {
        self.state.lock().map(|s| *s).unwrap_or_default()
    }

    /// Handle one submit event.
    ///
    /// The loading indicator is shown on entry and hidden on every exit path,
    /// including unwinding and the future being dropped, unless a newer
    /// submission has taken over the indicator. A dropped submission also
    /// leaves [`state`](Self::state) at `Idle`.
    pub async fn submit(&self) -> SubmissionOutcome {
        let token = self.sequence.issue();
        let mut state = SubmissionState::Idle;
        self.advance(token, &mut state, SubmissionState::Submitting);

        self.page.set_visible(&self.layout.loading_indicator_id, true);
        let _scope = SubmissionScope {
            page: self.page.as_ref(),
            indicator_id: &self.layout.loading_indicator_id,
            sequence: &self.sequence,
            state: &self.state,
            token,
        };
        self.clear_results();

        let record = CaseInputRecord::from_pairs(self.page.form_fields(&self.layout.form_id));
        info!(%token, fields = record.len(), "Submitting case");
        self.logger.log(
            SubmissionEvent::new(
                "submission_started",
                json!({ "fields": record.keys().collect::<Vec<_>>() }),
            )
            .with_token(token),
        );

        let response = self.gateway.generate(&record).await;

        if !self.sequence.is_latest(token) {
            let latest = self.sequence.latest();
            debug!(%token, ?latest, "Response arrived after a newer submission; discarding");
            self.logger.log(
                SubmissionEvent::new(
                    "submission_superseded",
                    json!({ "latest": latest.map(|t| t.value()) }),
                )
                .with_token(token),
            );
            return SubmissionOutcome::Superseded { token };
        }

        let outcome = match response {
            Err(e) => {
                let kind = match e {
                    GatewayError::Transport(_) => FailureKind::Transport,
                    GatewayError::MalformedResponse(_) => FailureKind::MalformedResponse,
                };
                self.fail(token, &mut state, kind, &e.to_string())
            }
            Ok(GenerationResult::Error { message }) => {
                self.fail(token, &mut state, FailureKind::Business, &message)
            }
            Ok(GenerationResult::Success(sections)) => {
                self.advance(token, &mut state, SubmissionState::Rendering);
                self.render(token, &sections);
                SubmissionOutcome::Rendered { token }
            }
        };

        self.advance(token, &mut state, SubmissionState::Idle);
        outcome
    }

    /// Empty every result container and the error banner
    fn clear_results(&self) {
        for tab in ResultTab::ALL {
            self.page.set_inner_html(self.layout.container_id(tab), "");
        }
        self.page.set_inner_html(&self.layout.error_container_id, "");
    }

    fn render(&self, token: SubmissionToken, sections: &GeneratedSections) {
        if let Some(reason) = malformed_reason(&sections.analysis) {
            warn!(%token, reason, "Analysis section could not be processed");
        }
        if let Some(reason) = malformed_reason(&sections.review) {
            warn!(%token, reason, "Review section could not be processed");
        }

        let passes = [
            (ResultTab::Document, self.renderer.render_document(&sections.document)),
            (ResultTab::Analysis, self.renderer.render_analysis(&sections.analysis)),
            (ResultTab::Basis, self.renderer.render_basis(&sections.basis)),
            (ResultTab::Review, self.renderer.render_review(&sections.review)),
        ];
        for (tab, html) in passes {
            self.page.set_inner_html(self.layout.container_id(tab), &html);
        }

        if !self.tabs.activate(&self.layout.document_tab_target) {
            warn!(tab = %self.layout.document_tab_target, "Result tab not found");
        }

        info!(%token, "Generation result rendered");
        self.logger.log(
            SubmissionEvent::new(
                "submission_rendered",
                json!({
                    "document_chars": sections.document.chars().count(),
                    "analysis_malformed": sections.analysis.is_malformed(),
                    "review_malformed": sections.review.is_malformed(),
                }),
            )
            .with_token(token),
        );
    }

    fn fail(
        &self,
        token: SubmissionToken,
        state: &mut SubmissionState,
        kind: FailureKind,
        message: &str,
    ) -> SubmissionOutcome {
        self.advance(token, state, SubmissionState::Failed);
        let message = banner_message(message).to_string();
        error!(%token, ?kind, message = %preview(&message, 200), "Submission failed");

        self.page.set_inner_html(
            &self.layout.error_container_id,
            &self.renderer.render_error_banner(&message),
        );
        self.logger.log(
            SubmissionEvent::new(
                "submission_failed",
                json!({ "kind": kind, "message": message }),
            )
            .with_token(token),
        );
        SubmissionOutcome::Failed {
            token,
            kind,
            message,
        }
    }

    /// Move this submission's state machine and publish it if still current
    fn advance(&self, token: SubmissionToken, state: &mut SubmissionState, next: SubmissionState) {
        match state.transition(next) {
            Ok(s) => *state = s,
            Err(e) => {
                warn!(%token, "{}", e);
                return;
            }
        }
        if self.sequence.is_latest(token)
            && let Ok(mut current) = self.state.lock()
        {
            *current = *state;
        }
        debug!(%token, state = %state, "Submission state");
    }
}

fn malformed_reason<T>(section: &SectionPayload<T>) -> Option<&str> {
    match section {
        SectionPayload::Malformed { reason } => Some(reason),
        SectionPayload::Parsed(_) => None,
    }
}

/// Exit step of a submission, run however the scope ends
///
/// For the latest submission this hides the loading indicator and settles the
/// published state back to `Idle`. The second part only matters when the
/// future is dropped mid-call; on normal exits the state is already `Idle`.
struct SubmissionScope<'a> {
    page: &'a dyn PagePort,
    indicator_id: &'a str,
    sequence: &'a SubmissionSequence,
    state: &'a Mutex<SubmissionState>,
    token: SubmissionToken,
}

impl Drop for SubmissionScope<'_> {
    fn drop(&mut self) {
        if !self.sequence.is_latest(self.token) {
            return;
        }
        self.page.set_visible(self.indicator_id, false);

        let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let from = *current;
        if from != SubmissionState::Idle {
            match from.transition(SubmissionState::Idle) {
                Ok(idle) => {
                    debug!(token = %self.token, from = %from, "Submission abandoned");
                    *current = idle;
                }
                Err(e) => warn!(token = %self.token, "{}", e),
            }
        }
    }
}
