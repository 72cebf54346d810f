//! JSONL file writer for submission events.
//!
//! One line per [`SubmissionEvent`]:
//!
//! ```text
//! {"timestamp":"…","event":"submission_failed","token":3,"kind":"transport","message":"offline"}
//! ```
//!
//! `token` is omitted for events outside a submission. Object payloads are
//! spread into the line; any other payload goes under `detail`. Existing
//! logs are appended to.

use drafter_application::ports::submission_logger::{SubmissionEvent, SubmissionLogger};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One line of the submission log
#[derive(Serialize)]
struct LogLine {
    timestamp: String,
    event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<u64>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl LogLine {
    fn from_event(event: SubmissionEvent) -> Self {
        let fields = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => Map::from_iter([("detail".to_string(), other)]),
        };
        Self {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: event.event_type,
            token: event.token.map(|t| t.value()),
            fields,
        }
    }
}

/// Submission logger writing one JSON object per line.
///
/// Each line is flushed as soon as it is complete.
pub struct JsonlSubmissionLogger {
    writer: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlSubmissionLogger {
    /// Open a logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                dir = %parent.display(),
                error = %e,
                "Could not create submission log directory"
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not open submission log file"
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionLogger for JsonlSubmissionLogger {
    fn log(&self, event: SubmissionEvent) {
        let event_type = event.event_type;
        let line = match serde_json::to_string(&LogLine::from_event(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!(event = event_type, error = %e, "Could not encode submission event");
                return;
            }
        };

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{line}") {
            warn!(path = %self.path.display(), error = %e, "Could not write submission event");
        }
    }
}
