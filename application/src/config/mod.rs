//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`PageLayout`] - element ids the submission flow reads and writes
//! - [`AutofillSettings`] - trigger id, schema and canned record
//! - [`ClipboardSettings`] - copy control and confirmation timing

pub mod autofill;
pub mod clipboard;
pub mod page_layout;

pub use autofill::AutofillSettings;
pub use clipboard::{ClipboardSettings, DEFAULT_CONFIRM_DURATION};
pub use page_layout::PageLayout;
