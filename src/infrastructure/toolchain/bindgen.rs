//! Stage 2: generate the JavaScript loader with wasm-bindgen

use std::path::PathBuf;

use crate::config::BindgenConfig;
use crate::domain::ports::{CommandRunner, FileSystem, Invocation};
use crate::error::{ArtifactKind, SoupError, SoupResult};
use crate::layout::ProjectLayout;

use super::CompiledModule;

/// What a successful wasm-bindgen run left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindgenOutput {
    pub out_dir: PathBuf,
    pub loader: PathBuf,
    pub wasm: PathBuf,
}

/// `wasm-bindgen <wasm> --out-dir <dir> --target web --no-typescript`
pub struct WasmBindgen<'a> {
    layout: &'a ProjectLayout,
    program: &'a str,
}

impl<'a> WasmBindgen<'a> {
    pub fn new(layout: &'a ProjectLayout, bindgen: &'a BindgenConfig) -> Self {
        Self {
            layout,
            program: &bindgen.program,
        }
    }

    pub fn invocation(&self, module: &CompiledModule) -> Invocation {
        Invocation::new(self.program, &self.layout.project_dir)
            .arg(module.wasm.display().to_string())
            .arg("--out-dir")
            .arg(self.layout.out_dir.display().to_string())
            .args(["--target", "web", "--no-typescript"])
    }

    /// Run wasm-bindgen and confirm the loader and binary were produced.
    pub fn run(
        &self,
        module: &CompiledModule,
        runner: &impl CommandRunner,
        fs: &impl FileSystem,
    ) -> SoupResult<BindgenOutput> {
        runner.run(&self.invocation(module))?;

        let loader = self.layout.loader();
        if !fs.exists(&loader) {
            return Err(SoupError::MissingArtifact {
                kind: ArtifactKind::Loader,
                path: loader,
            });
        }
        let wasm = self.layout.bindgen_wasm();
        if !fs.exists(&wasm) {
            return Err(SoupError::MissingArtifact {
                kind: ArtifactKind::Binary,
                path: wasm,
            });
        }

        Ok(BindgenOutput {
            out_dir: self.layout.out_dir.clone(),
            loader,
            wasm,
        })
    }
}
