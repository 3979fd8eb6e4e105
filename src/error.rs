//! Error types for wasm-soup
//!
//! Library code returns [`SoupResult`]; the binary wraps it in `anyhow` only
//! at the process boundary.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wasm-soup operations
pub type SoupResult<T> = Result<T, SoupError>;

/// Which artifact a [`SoupError::MissingArtifact`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The compiled `.wasm` module
    Binary,
    /// The bindgen-generated JavaScript loader
    Loader,
    /// An inline snippet referenced from the loader
    Snippet,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Binary => "binary module",
            ArtifactKind::Loader => "loader script",
            ArtifactKind::Snippet => "snippet script",
        };
        f.write_str(name)
    }
}

/// Main error type for wasm-soup operations
#[derive(Error, Debug)]
pub enum SoupError {
    /// An external tool could not be started at all
    #[error("failed to run '{tool}': {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// An external tool ran and exited unsuccessfully
    #[error("'{tool}' failed with {}", exit_description(.code))]
    ToolFailed { tool: String, code: Option<i32> },

    /// An expected artifact was not found on disk
    #[error("{kind} not found: {path}")]
    MissingArtifact { kind: ArtifactKind, path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Module name cannot be turned into an output file stem
    #[error("invalid module name '{name}'")]
    InvalidModuleName { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl SoupError {
    /// Process exit status to use when this error reaches `main`.
    ///
    /// A failing tool's own exit code is propagated; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SoupError::ToolFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
