//! Terminal page: an in-memory drafting page driven from the command line.
//!
//! Holds the form, its four result containers, the error banner and the
//! loading indicator the way the browser page does. The loading indicator
//! is shown as a spinner; alerts go to stderr.

use crate::page::text::inner_text;
use colored::Colorize;
use drafter_application::PageLayout;
use drafter_application::ports::page::{FieldEvent, FieldKind, PagePort, SelectOption};
use drafter_application::ports::tab_widget::TabWidgetPort;
use drafter_domain::{CASE_TYPE_OPTIONS, CaseSchema, ResultTab, validate_field};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug;

const LOADING_MESSAGE: &str = "Gerando documento...";

#[derive(Debug, Clone)]
struct Field {
    kind: FieldKind,
    form: String,
    value: String,
    options: Vec<SelectOption>,
    invalid: bool,
}

#[derive(Debug, Clone, Default)]
struct Element {
    field: Option<Field>,
    html: String,
    visible: bool,
    label: String,
}

#[derive(Default)]
struct PageState {
    elements: HashMap<String, Element>,
    /// Element ids in document order
    order: Vec<String>,
    active_tab: Option<String>,
    spinner: Option<ProgressBar>,
    alerts: Vec<String>,
}

impl PageState {
    fn insert(&mut self, id: &str, element: Element) {
        if !self.elements.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.elements.insert(id.to_string(), element);
    }
}

/// Drafting page rendered to the terminal
pub struct TerminalPage {
    schema: CaseSchema,
    layout: PageLayout,
    show_progress: bool,
    state: Mutex<PageState>,
}

impl TerminalPage {
    /// Page with every layout element and one field per schema key
    pub fn new(layout: PageLayout, schema: CaseSchema) -> Self {
        let mut state = PageState::default();
        for id in layout.element_ids() {
            state.insert(id, Element::default());
        }
        for key in schema.field_keys() {
            let is_choice = schema.rule(key).is_some_and(|rule| rule.choice);
            let kind = match *key {
                _ if is_choice => FieldKind::Select,
                "autor" | "reu" => FieldKind::Input,
                _ => FieldKind::TextArea,
            };
            let options = if is_choice {
                CASE_TYPE_OPTIONS
                    .iter()
                    .map(|option| SelectOption::new(*option, *option))
                    .collect()
            } else {
                Vec::new()
            };
            state.insert(
                key,
                Element {
                    field: Some(Field {
                        kind,
                        form: layout.form_id.clone(),
                        value: String::new(),
                        options,
                        invalid: false,
                    }),
                    label: schema.label(key).unwrap_or(*key).to_string(),
                    ..Default::default()
                },
            );
        }

        Self {
            schema,
            layout,
            show_progress: true,
            state: Mutex::new(state),
        }
    }

    /// Add a control such as the autofill trigger or the copy button
    pub fn with_control(self, id: &str, label: &str) -> Self {
        self.lock().insert(
            id,
            Element {
                label: label.to_string(),
                ..Default::default()
            },
        );
        self
    }

    /// Show a spinner while the loading indicator is visible
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn schema(&self) -> CaseSchema {
        self.schema
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Alerts shown so far
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(LOADING_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl PagePort for TerminalPage {
    fn has_element(&self, id: &str) -> bool {
        self.lock().elements.contains_key(id)
    }

    fn field_kind(&self, id: &str) -> Option<FieldKind> {
        Some(self.lock().elements.get(id)?.field.as_ref()?.kind)
    }

    fn select_options(&self, id: &str) -> Vec<SelectOption> {
        self.lock()
            .elements
            .get(id)
            .and_then(|e| e.field.as_ref())
            .map(|f| f.options.clone())
            .unwrap_or_default()
    }

    fn field_value(&self, id: &str) -> Option<String> {
        Some(self.lock().elements.get(id)?.field.as_ref()?.value.clone())
    }

    fn set_field_value(&self, id: &str, value: &str) -> bool {
        let mut state = self.lock();
        let Some(field) = state.elements.get_mut(id).and_then(|e| e.field.as_mut()) else {
            return false;
        };
        if field.kind == FieldKind::Select && !field.options.iter().any(|o| o.value == value) {
            // a select only takes one of its option values
            return false;
        }
        field.value = value.to_string();
        true
    }

    fn dispatch_field_event(&self, id: &str, event: FieldEvent) {
        let mut state = self.lock();
        let Some(field) = state.elements.get_mut(id).and_then(|e| e.field.as_mut()) else {
            return;
        };
        if event == FieldEvent::Input {
            field.invalid = validate_field(self.schema, id, &field.value).is_err();
        }
        debug!(field = id, event = event.as_str(), invalid = field.invalid, "Field event");
    }

    fn is_marked_invalid(&self, id: &str) -> bool {
        self.lock()
            .elements
            .get(id)
            .and_then(|e| e.field.as_ref())
            .is_some_and(|f| f.invalid)
    }

    fn set_invalid_mark(&self, id: &str, invalid: bool) {
        if let Some(field) = self.lock().elements.get_mut(id).and_then(|e| e.field.as_mut()) {
            field.invalid = invalid;
        }
    }

    fn form_fields(&self, form_id: &str) -> Vec<(String, String)> {
        let state = self.lock();
        state
            .order
            .iter()
            .filter_map(|id| {
                let field = state.elements.get(id)?.field.as_ref()?;
                (field.form == form_id).then(|| (id.clone(), field.value.clone()))
            })
            .collect()
    }

    fn set_inner_html(&self, id: &str, html: &str) {
        if let Some(element) = self.lock().elements.get_mut(id) {
            element.html = html.to_string();
        }
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).map(|e| e.html.clone())
    }

    fn inner_text(&self, id: &str) -> Option<String> {
        self.inner_html(id).map(|html| inner_text(&html))
    }

    fn set_visible(&self, id: &str, visible: bool) {
        let show_spinner = self.show_progress && id == self.layout.loading_indicator_id;
        let mut state = self.lock();
        let Some(element) = state.elements.get_mut(id) else {
            return;
        };
        element.visible = visible;

        if show_spinner {
            if visible {
                if state.spinner.is_none() {
                    state.spinner = Some(Self::spinner());
                }
            } else if let Some(spinner) = state.spinner.take() {
                spinner.finish_and_clear();
            }
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.lock().elements.get(id).is_some_and(|e| e.visible)
    }

    fn label(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).map(|e| e.label.clone())
    }

    fn set_label(&self, id: &str, label: &str) {
        if let Some(element) = self.lock().elements.get_mut(id) {
            element.label = label.to_string();
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".red().bold(), message.red());
        self.lock().alerts.push(message.to_string());
    }
}

impl TabWidgetPort for TerminalPage {
    /// Result tab ids and the layout's configured document tab target
    fn activate(&self, tab_id: &str) -> bool {
        let id = match ResultTab::from_str(tab_id) {
            Ok(tab) => tab.id().to_string(),
            Err(_) if tab_id == self.layout.document_tab_target => tab_id.to_string(),
            Err(_) => return false,
        };
        self.lock().active_tab = Some(id);
        true
    }

    fn active(&self) -> Option<String> {
        self.lock().active_tab.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> TerminalPage {
        TerminalPage::new(PageLayout::default(), CaseSchema::Long).with_progress(false)
    }

    #[test]
    fn test_layout_elements_exist() {
        let page = page();
        for id in PageLayout::default().element_ids() {
            assert!(page.has_element(id), "{id}");
        }
        assert!(!page.has_element("fillExample"));
        assert!(page.with_control("fillExample", "Preencher Exemplo").has_element("fillExample"));
    }

    #[test]
    fn test_form_fields_in_schema_order() {
        let page = page();
        let keys: Vec<String> = page
            .form_fields("legalForm")
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, CaseSchema::Long.field_keys());
        assert!(page.form_fields("otherForm").is_empty());
    }

    #[test]
    fn test_case_type_is_select_with_options() {
        let page = page();
        assert_eq!(page.field_kind("case_type"), Some(FieldKind::Select));
        assert_eq!(page.field_kind("facts"), Some(FieldKind::TextArea));
        assert_eq!(page.select_options("case_type").len(), CASE_TYPE_OPTIONS.len());

        assert!(page.set_field_value("case_type", "Recurso"));
        assert!(!page.set_field_value("case_type", "Mandado de Segurança"));
        assert_eq!(page.field_value("case_type").as_deref(), Some("Recurso"));
    }

    #[test]
    fn test_short_schema_party_fields_are_inputs() {
        let page = TerminalPage::new(PageLayout::default(), CaseSchema::Short);
        assert_eq!(page.field_kind("autor"), Some(FieldKind::Input));
        assert_eq!(page.field_kind("tipo_acao"), Some(FieldKind::Select));
        assert_eq!(page.label("reu").as_deref(), Some("Réu"));
    }

    #[test]
    fn test_input_event_validates_field() {
        let page = page();
        page.set_field_value("facts", "curto");
        page.dispatch_field_event("facts", FieldEvent::Input);
        assert!(page.is_marked_invalid("facts"));

        page.set_invalid_mark("facts", false);
        assert!(!page.is_marked_invalid("facts"));

        page.set_field_value("facts", &"Fatos do caso. ".repeat(5));
        page.dispatch_field_event("facts", FieldEvent::Input);
        assert!(!page.is_marked_invalid("facts"));
    }

    #[test]
    fn test_inner_text_strips_markup() {
        let page = page();
        page.set_inner_html("documentContent", "<pre class=\"document-text\">A &amp; B</pre>");
        assert_eq!(page.inner_text("documentContent").as_deref(), Some("A & B"));
        assert_eq!(page.inner_text("missing"), None);
    }

    #[test]
    fn test_loading_indicator_visibility() {
        let page = page();
        assert!(!page.is_visible("loadingIndicator"));
        page.set_visible("loadingIndicator", true);
        assert!(page.is_visible("loadingIndicator"));
        page.set_visible("loadingIndicator", false);
        assert!(!page.is_visible("loadingIndicator"));
    }

    #[test]
    fn test_tabs_accept_result_tab_ids_only() {
        let page = page();
        assert_eq!(page.active(), None);
        assert!(page.activate("document"));
        assert_eq!(page.active().as_deref(), Some("document"));
        assert!(!page.activate("settings"));
        assert_eq!(page.active().as_deref(), Some("document"));
    }

    #[test]
    fn test_configured_document_tab_target_is_accepted() {
        let layout = PageLayout {
            document_tab_target: "documento-gerado".to_string(),
            ..PageLayout::default()
        };
        let page = TerminalPage::new(layout, CaseSchema::Long).with_progress(false);
        assert!(page.activate("documento-gerado"));
        assert_eq!(page.active().as_deref(), Some("documento-gerado"));
        assert!(!page.activate("settings"));
    }

    #[test]
    fn test_alerts_are_recorded() {
        let page = page();
        page.alert("Erro ao copiar o texto. Por favor, tente novamente.");
        assert_eq!(page.alerts().len(), 1);
    }
}
