//! Pipeline Event Port
//!
//! Progress reporting for a packaging run. The console and the NDJSON
//! stream both render these.

use std::path::PathBuf;

use crate::domain::value_objects::{ConfigWarning, ContentHash};

/// The four pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Compiling the wasm module
    Build,
    /// Generating the JavaScript loader
    Bindgen,
    /// Reading artifacts from disk
    Load,
    /// Producing and writing the page
    Assemble,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Build => "build",
            Stage::Bindgen => "bindgen",
            Stage::Load => "load",
            Stage::Assemble => "assemble",
        }
    }
}

/// Event emitted during a packaging run
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Run started
    Started { module: String, output: PathBuf },

    /// Config file produced a warning
    ConfigWarning(ConfigWarning),

    /// A stage began
    StageStarted { stage: Stage },

    /// An external command is about to run
    Command { stage: Stage, command: String },

    /// A stage finished
    StageFinished { stage: Stage },

    /// An artifact was read
    ArtifactLoaded { path: PathBuf, bytes: usize },

    /// Snippets referenced by the loader
    SnippetsDiscovered { count: usize },

    /// Non-fatal issue worth showing
    Warning { message: String },

    /// The page was written
    Written {
        path: PathBuf,
        bytes: usize,
        snippet_count: usize,
        hash: ContentHash,
    },
}

/// Trait for receiving pipeline events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PipelineEventSink {
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}
