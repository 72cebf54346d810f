//! HTML rendering of generation results

pub mod html;

pub use html::{HtmlResultRenderer, escape_html};
