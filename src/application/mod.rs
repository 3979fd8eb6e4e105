//! Application Layer
//!
//! Use cases that orchestrate the packaging flow.
//! This layer:
//! - Depends on Domain layer (entities, ports) and the embedding functions
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Pipeline::build` - cargo build, wasm-bindgen, load, assemble
//! - `Pipeline::assemble` - load and assemble from artifacts already on disk
//! - `load_artifacts` - read the binary, loader and snippets

mod artifacts;
pub mod pipeline;

pub use artifacts::load_artifacts;
pub use pipeline::{group_thousands, page_options, Pipeline, PipelineReport};
