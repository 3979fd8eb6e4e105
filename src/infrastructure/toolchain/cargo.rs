//! Stage 1: compile the wasm module with cargo

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::domain::ports::{CommandRunner, FileSystem, Invocation};
use crate::error::{ArtifactKind, SoupError, SoupResult};
use crate::layout::ProjectLayout;

/// What a successful `cargo build` left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledModule {
    pub wasm: PathBuf,
}

/// `cargo build --target <triple> [--release] --target-dir <dir> [args...]`
pub struct CargoBuild<'a> {
    layout: &'a ProjectLayout,
    program: &'a str,
    extra_args: &'a [String],
}

impl<'a> CargoBuild<'a> {
    pub fn new(layout: &'a ProjectLayout, build: &'a BuildConfig) -> Self {
        Self {
            layout,
            program: &build.program,
            extra_args: &build.args,
        }
    }

    pub fn invocation(&self) -> Invocation {
        let mut inv = Invocation::new(self.program, &self.layout.project_dir)
            .arg("build")
            .args(["--target", &self.layout.target]);
        if let Some(flag) = self.layout.profile.cargo_flag() {
            inv = inv.arg(flag);
        }
        inv.arg("--target-dir")
            .arg(self.layout.target_dir.display().to_string())
            .args(self.extra_args.iter().cloned())
    }

    /// Run cargo and confirm the module was produced.
    pub fn run(
        &self,
        runner: &impl CommandRunner,
        fs: &impl FileSystem,
    ) -> SoupResult<CompiledModule> {
        runner.run(&self.invocation())?;

        let wasm = self.layout.compiled_wasm();
        if !fs.exists(&wasm) {
            return Err(SoupError::MissingArtifact {
                kind: ArtifactKind::Binary,
                path: wasm,
            });
        }
        Ok(CompiledModule { wasm })
    }
}
