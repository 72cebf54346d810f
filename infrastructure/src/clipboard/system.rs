//! System clipboard through the platform's copy helper.
//!
//! The first helper found on `PATH` is used; text is piped to its stdin.

use async_trait::async_trait;
use drafter_application::ports::clipboard::{ClipboardError, ClipboardPort};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Known helpers, in preference order
const HELPERS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// [`ClipboardPort`] that pipes text into a copy helper command
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Find a copy helper on `PATH`.
    ///
    /// Returns `None` if none is installed.
    pub fn detect() -> Option<Self> {
        let found = HELPERS
            .iter()
            .find(|(program, _)| which::which(program).is_ok());
        match found {
            Some((program, args)) => {
                info!(helper = program, "Clipboard helper found");
                Some(Self::with_command(*program, args.iter().copied()))
            }
            None => {
                debug!("No clipboard helper found, copy disabled");
                None
            }
        }
    }

    /// Use a specific helper command
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ClipboardError::Unavailable(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
            // closing stdin ends the helper's input
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        debug!(helper = %self.program, bytes = text.len(), "Clipboard written");
        Ok(())
    }
}
