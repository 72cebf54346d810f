//! Presentation layer for legal-drafter
//!
//! This crate contains the HTML result renderer, the terminal page the
//! controllers drive, CLI definitions and output formatters.

pub mod cli;
pub mod output;
pub mod page;
pub mod render;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{ConsoleFormatter, OutputFormatter, ResultSnapshot};
pub use page::TerminalPage;
pub use render::HtmlResultRenderer;
