//! Clipboard adapter backed by platform helper commands

mod system;

pub use system::SystemClipboard;
