//! External toolchain steps
//!
//! Stage 1 (`cargo build`) and stage 2 (`wasm-bindgen`) as two separate
//! steps. Each builds an [`Invocation`](crate::domain::ports::Invocation),
//! runs it through a [`CommandRunner`](crate::domain::ports::CommandRunner)
//! and checks that the files it promises are really there.

mod bindgen;
mod cargo;
#[cfg(test)]
mod fake;
mod process;

pub use bindgen::{BindgenOutput, WasmBindgen};
pub use cargo::{CargoBuild, CompiledModule};
#[cfg(test)]
pub use fake::FakeRunner;
pub use process::SystemRunner;
