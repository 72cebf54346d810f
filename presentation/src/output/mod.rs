//! Output formatting for the terminal

pub mod console;
pub mod formatter;
pub mod snapshot;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;
pub use snapshot::{RenderedView, ResultSnapshot};
