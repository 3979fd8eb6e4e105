//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }

    fn to_json(&self, event: PipelineEvent) -> serde_json::Value {
        let command = self.command;
        match event {
            PipelineEvent::Started { module, output } => serde_json::json!({
                "event": "start",
                "command": command,
                "module": module,
                "output": output.display().to_string(),
            }),

            PipelineEvent::ConfigWarning(warning) => serde_json::json!({
                "event": "config_warning",
                "command": command,
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }),

            PipelineEvent::StageStarted { stage } => serde_json::json!({
                "event": "stage_start",
                "command": command,
                "stage": stage.as_str(),
            }),

            PipelineEvent::Command { stage, command: line } => serde_json::json!({
                "event": "exec",
                "command": command,
                "stage": stage.as_str(),
                "exec": line,
            }),

            PipelineEvent::StageFinished { stage } => serde_json::json!({
                "event": "stage_complete",
                "command": command,
                "stage": stage.as_str(),
            }),

            PipelineEvent::ArtifactLoaded { path, bytes } => serde_json::json!({
                "event": "artifact_loaded",
                "command": command,
                "path": path.display().to_string(),
                "bytes": bytes,
            }),

            PipelineEvent::SnippetsDiscovered { count } => serde_json::json!({
                "event": "snippets",
                "command": command,
                "count": count,
            }),

            PipelineEvent::Warning { message } => serde_json::json!({
                "event": "warning",
                "command": command,
                "message": message,
            }),

            PipelineEvent::Written {
                path,
                bytes,
                snippet_count,
                hash,
            } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "path": path.display().to_string(),
                "bytes": bytes,
                "kb": bytes / 1024,
                "snippets": snippet_count,
                "hash": hash.to_string(),
            }),
        }
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let json = self.to_json(event);
        self.write_event(json);
    }
}
