//! Port mocks shared by the use case tests.

use crate::config::PageLayout;
use crate::ports::clipboard::{ClipboardError, ClipboardPort};
use crate::ports::generation_gateway::{GatewayError, GenerationGateway};
use crate::ports::page::{FieldEvent, FieldKind, PagePort, SelectOption};
use crate::ports::renderer::ResultRenderer;
use crate::ports::submission_logger::{SubmissionEvent, SubmissionLogger};
use crate::ports::tab_widget::TabWidgetPort;
use async_trait::async_trait;
use drafter_domain::{
    AnalysisPayload, CaseInputRecord, GenerationResult, ReviewPayload, SectionPayload,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

// ==================== Page ====================

#[derive(Debug, Default, Clone)]
pub(crate) struct MockElement {
    pub kind: Option<FieldKind>,
    pub form: Option<String>,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub invalid: bool,
    pub html: String,
    pub visible: bool,
    pub label: String,
}

#[derive(Default)]
pub(crate) struct MockPage {
    elements: Mutex<HashMap<String, MockElement>>,
    order: Mutex<Vec<String>>,
    pub events: Mutex<Vec<(String, FieldEvent)>>,
    pub visibility_changes: Mutex<Vec<(String, bool)>>,
    pub alerts: Mutex<Vec<String>>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, id: &str, element: MockElement) {
        let mut order = self.order.lock().unwrap();
        if !order.iter().any(|existing| existing == id) {
            order.push(id.to_string());
        }
        self.elements.lock().unwrap().insert(id.to_string(), element);
    }

    pub fn with_element(self, id: &str) -> Self {
        self.insert(id, MockElement::default());
        self
    }

    /// Every element of the layout, result containers empty
    pub fn with_layout(self, layout: &PageLayout) -> Self {
        for id in layout.element_ids() {
            self.insert(id, MockElement::default());
        }
        self
    }

    pub fn with_field(self, form_id: &str, id: &str, kind: FieldKind, value: &str) -> Self {
        self.insert(
            id,
            MockElement {
                kind: Some(kind),
                form: Some(form_id.to_string()),
                value: value.to_string(),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_select(self, form_id: &str, id: &str, options: &[(&str, &str)]) -> Self {
        self.insert(
            id,
            MockElement {
                kind: Some(FieldKind::Select),
                form: Some(form_id.to_string()),
                options: options
                    .iter()
                    .map(|(value, text)| SelectOption::new(*value, *text))
                    .collect(),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_label(self, id: &str, label: &str) -> Self {
        self.insert(
            id,
            MockElement {
                label: label.to_string(),
                ..Default::default()
            },
        );
        self
    }

    pub fn mark_invalid(&self, id: &str) {
        if let Some(element) = self.elements.lock().unwrap().get_mut(id) {
            element.invalid = true;
        }
    }

    pub fn html(&self, id: &str) -> String {
        self.inner_html(id).unwrap_or_default()
    }

    pub fn hide_count(&self, id: &str) -> usize {
        self.visibility_changes
            .lock()
            .unwrap()
            .iter()
            .filter(|(element, visible)| element == id && !visible)
            .count()
    }
}

impl PagePort for MockPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.lock().unwrap().contains_key(id)
    }

    fn field_kind(&self, id: &str) -> Option<FieldKind> {
        self.elements.lock().unwrap().get(id).and_then(|e| e.kind)
    }

    fn select_options(&self, id: &str) -> Vec<SelectOption> {
        self.elements
            .lock()
            .unwrap()
            .get(id)
            .map(|e| e.options.clone())
            .unwrap_or_default()
    }

    fn field_value(&self, id: &str) -> Option<String> {
        self.elements.lock().unwrap().get(id).map(|e| e.value.clone())
    }

    fn set_field_value(&self, id: &str, value: &str) -> bool {
        match self.elements.lock().unwrap().get_mut(id) {
            Some(element) if element.kind.is_some() => {
                element.value = value.to_string();
                true
            }
            _ => false,
        }
    }

    fn dispatch_field_event(&self, id: &str, event: FieldEvent) {
        self.events.lock().unwrap().push((id.to_string(), event));
    }

    fn is_marked_invalid(&self, id: &str) -> bool {
        self.elements
            .lock()
            .unwrap()
            .get(id)
            .is_some_and(|e| e.invalid)
    }

    fn set_invalid_mark(&self, id: &str, invalid: bool) {
        if let Some(element) = self.elements.lock().unwrap().get_mut(id) {
            element.invalid = invalid;
        }
    }

    fn form_fields(&self, form_id: &str) -> Vec<(String, String)> {
        let order = self.order.lock().unwrap();
        let elements = self.elements.lock().unwrap();
        order
            .iter()
            .filter_map(|id| {
                let element = elements.get(id)?;
                (element.form.as_deref() == Some(form_id))
                    .then(|| (id.clone(), element.value.clone()))
            })
            .collect()
    }

    fn set_inner_html(&self, id: &str, html: &str) {
        if let Some(element) = self.elements.lock().unwrap().get_mut(id) {
            element.html = html.to_string();
        }
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.elements.lock().unwrap().get(id).map(|e| e.html.clone())
    }

    fn inner_text(&self, id: &str) -> Option<String> {
        let html = self.inner_html(id)?;
        let mut text = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        Some(text)
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.visibility_changes
            .lock()
            .unwrap()
            .push((id.to_string(), visible));
        if let Some(element) = self.elements.lock().unwrap().get_mut(id) {
            element.visible = visible;
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.elements
            .lock()
            .unwrap()
            .get(id)
            .is_some_and(|e| e.visible)
    }

    fn label(&self, id: &str) -> Option<String> {
        self.elements.lock().unwrap().get(id).map(|e| e.label.clone())
    }

    fn set_label(&self, id: &str, label: &str) {
        if let Some(element) = self.elements.lock().unwrap().get_mut(id) {
            element.label = label.to_string();
        }
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

// ==================== Tabs ====================

#[derive(Default)]
pub(crate) struct MockTabs {
    pub activations: Mutex<Vec<String>>,
}

impl TabWidgetPort for MockTabs {
    fn activate(&self, tab_id: &str) -> bool {
        self.activations.lock().unwrap().push(tab_id.to_string());
        true
    }

    fn active(&self) -> Option<String> {
        self.activations.lock().unwrap().last().cloned()
    }
}

// ==================== Gateway ====================

/// Returns scripted results in order and records every request
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<GenerationResult, GatewayError>>>,
    pub requests: Mutex<Vec<CaseInputRecord>>,
}

impl ScriptedGateway {
    pub fn new(responses: Vec<Result<GenerationResult, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(body: serde_json::Value) -> Self {
        Self::new(vec![Ok(GenerationResult::from_json(body).unwrap())])
    }
}

#[async_trait]
impl GenerationGateway for ScriptedGateway {
    async fn generate(&self, record: &CaseInputRecord) -> Result<GenerationResult, GatewayError> {
        self.requests.lock().unwrap().push(record.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("no scripted response".to_string())))
    }
}

/// Each call waits until the test releases it, so completions can be reordered
#[derive(Default)]
pub(crate) struct GatedGateway {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<GenerationResult, GatewayError>>>>,
}

impl GatedGateway {
    /// Queue a gate for the next call and return its release handle
    pub fn gate(&self) -> oneshot::Sender<Result<GenerationResult, GatewayError>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back(rx);
        tx
    }
}

#[async_trait]
impl GenerationGateway for GatedGateway {
    async fn generate(&self, _record: &CaseInputRecord) -> Result<GenerationResult, GatewayError> {
        let rx = self
            .pending
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Transport("no gate".to_string()))?;
        rx.await
            .unwrap_or_else(|_| Err(GatewayError::Transport("gate dropped".to_string())))
    }
}

// ==================== Renderer ====================

/// Compact renderer: one tagged line per section
pub(crate) struct TaggedRenderer;

impl ResultRenderer for TaggedRenderer {
    fn render_document(&self, document: &str) -> String {
        format!("<pre>{document}</pre>")
    }

    fn render_analysis(&self, analysis: &SectionPayload<AnalysisPayload>) -> String {
        match analysis.parsed() {
            Some(payload) => payload
                .sections()
                .iter()
                .map(|(title, items)| format!("<h4>{title}</h4><ul>{}</ul>", items.len()))
                .collect(),
            None => "<p>analysis fallback</p>".to_string(),
        }
    }

    fn render_basis(&self, basis: &str) -> String {
        format!("<pre>{basis}</pre>")
    }

    fn render_review(&self, review: &SectionPayload<ReviewPayload>) -> String {
        match review.parsed() {
            Some(payload) => payload
                .aspects()
                .iter()
                .map(|(label, text)| format!("<p>{label}: {text}</p>"))
                .collect(),
            None => "<p>review fallback</p>".to_string(),
        }
    }

    fn render_error_banner(&self, message: &str) -> String {
        format!("<div class=\"alert\">{message}</div>")
    }
}

// ==================== Logger / Clipboard ====================

#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub events: Mutex<Vec<&'static str>>,
    pub tokens: Mutex<Vec<Option<u64>>>,
}

impl SubmissionLogger for RecordingLogger {
    fn log(&self, event: SubmissionEvent) {
        self.events.lock().unwrap().push(event.event_type);
        self.tokens
            .lock()
            .unwrap()
            .push(event.token.map(|t| t.value()));
    }
}

#[derive(Default)]
pub(crate) struct MockClipboard {
    pub fail: bool,
    pub written: Mutex<Vec<String>>,
}

#[async_trait]
impl ClipboardPort for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("denied".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
