//! Event Sink Implementations
//!
//! Concrete implementations of PipelineEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console renderer lives with the CLI, next to the terminal theme.

mod json;

pub use json::JsonEventSink;
