//! wasm-soup - single-file packaging for wasm-bindgen web builds
//!
//! Compiles a crate to `wasm32-unknown-unknown`, runs `wasm-bindgen --target web`
//! on it, and folds the module, its loader and every inline snippet into one
//! HTML page that works from `file://`.

pub mod application;
pub mod config;
pub mod domain;
pub mod embed;
pub mod error;
pub mod infrastructure;
pub mod layout;

// Re-exports for convenience
pub use application::{Pipeline, PipelineReport};
pub use config::Config;
pub use error::{ArtifactKind, SoupError, SoupResult};
pub use layout::ProjectLayout;
