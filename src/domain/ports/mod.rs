//! Ports - interfaces the pipeline uses to reach the outside world
//!
//! Implementations live in `infrastructure/`; tests substitute in-memory or
//! recording versions.

pub mod command_runner;
pub mod file_system;
pub mod pipeline_events;

pub use command_runner::{CommandRunner, Invocation};
pub use file_system::FileSystem;
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink, Stage};
