//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory for tests)
//! - `toolchain/` - cargo and wasm-bindgen steps, process runner
//! - `events/` - Event sink implementations

pub mod events;
pub mod fs;
pub mod toolchain;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use toolchain::{BindgenOutput, CargoBuild, CompiledModule, SystemRunner, WasmBindgen};
