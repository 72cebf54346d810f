//! Page port
//!
//! Defines the contract with the document the controllers drive: element
//! lookup, form fields, result containers, the loading indicator and alerts.
//! The terminal page implements it; a DOM binding would too.

/// Kind of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea,
    Select,
}

/// One option of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Notification fired on a form control after its value changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Input,
    Change,
}

impl FieldEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldEvent::Input => "input",
            FieldEvent::Change => "change",
        }
    }
}

/// Access to the live page
///
/// Methods take `&self`; implementations keep their own interior mutability
/// so a page can be shared between the controllers.
pub trait PagePort: Send + Sync {
    /// Whether an element with this id exists
    fn has_element(&self, id: &str) -> bool;

    /// Kind of the form control with this id, `None` if there is no such control
    fn field_kind(&self, id: &str) -> Option<FieldKind>;

    /// Options of a select control (empty for other controls)
    fn select_options(&self, id: &str) -> Vec<SelectOption>;

    fn field_value(&self, id: &str) -> Option<String>;

    /// Write a control's value; returns `false` when the control does not exist
    fn set_field_value(&self, id: &str, value: &str) -> bool;

    /// Fire a bubbling notification on a control so page listeners observe it
    fn dispatch_field_event(&self, id: &str, event: FieldEvent);

    fn is_marked_invalid(&self, id: &str) -> bool;

    fn set_invalid_mark(&self, id: &str, invalid: bool);

    /// Current `(name, value)` pairs of a form, in document order
    fn form_fields(&self, form_id: &str) -> Vec<(String, String)>;

    fn set_inner_html(&self, id: &str, html: &str);

    fn inner_html(&self, id: &str) -> Option<String>;

    /// Rendered text of an element, markup stripped
    fn inner_text(&self, id: &str) -> Option<String>;

    fn set_visible(&self, id: &str, visible: bool);

    fn is_visible(&self, id: &str) -> bool;

    /// Visible label of a control
    fn label(&self, id: &str) -> Option<String>;

    fn set_label(&self, id: &str, label: &str);

    /// Blocking user alert
    fn alert(&self, message: &str);
}
