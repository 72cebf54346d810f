//! Terminal rendition of the drafting page

pub mod terminal;
pub mod text;

pub use terminal::TerminalPage;
pub use text::inner_text;
