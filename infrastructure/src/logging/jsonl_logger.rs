//! JSONL file writer for advisory events.
//!
//! Each [`AdvisoryEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use advisor_application::{AdvisoryEvent, AdvisoryLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL advisory logger that writes one JSON object per line.
///
/// The file is opened in append mode so successive runs share one log.
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAdvisoryLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAdvisoryLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create advisory log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open advisory log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AdvisoryLogger for JsonlAdvisoryLogger {
    fn log(&self, event: AdvisoryEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAdvisoryLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("advisory.jsonl");
        let logger = JsonlAdvisoryLogger::new(&path).unwrap();

        logger.log(AdvisoryEvent::new(
            "advisory_completed",
            serde_json::json!({
                "task": "proposal_analysis",
                "provider": "openai",
                "outcome": "parsed",
                "reason": null,
            }),
        ));
        logger.log(AdvisoryEvent::new(
            "advisory_completed",
            serde_json::json!({
                "task": "insights",
                "provider": null,
                "outcome": "fallback",
                "reason": "not_configured",
            }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for value in &lines {
            assert_eq!(value["type"], "advisory_completed");
            assert!(value["timestamp"].is_string());
        }
        assert_eq!(lines[0]["provider"], "openai");
        assert_eq!(lines[1]["reason"], "not_configured");
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("advisory.jsonl");

        for task in ["insights", "improvement"] {
            let logger = JsonlAdvisoryLogger::new(&path).unwrap();
            logger.log(AdvisoryEvent::new(
                "advisory_completed",
                serde_json::json!({ "task": task }),
            ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["task"], "insights");
        assert_eq!(lines[1]["task"], "improvement");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("advisory.jsonl");
        let logger = JsonlAdvisoryLogger::new(&path).unwrap();

        logger.log(AdvisoryEvent::new(
            "simple_event",
            serde_json::json!("just a string"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "simple_event");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_jsonl_logger_returns_none_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(JsonlAdvisoryLogger::new(blocker.join("advisory.jsonl")).is_none());
    }
}
