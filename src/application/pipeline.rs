//! Packaging pipeline
//!
//! Runs the four stages in order and stops at the first error:
//!
//! 1. `cargo build` (skipped by [`Pipeline::assemble`])
//! 2. `wasm-bindgen` (skipped by [`Pipeline::assemble`])
//! 3. load the binary, loader and snippets
//! 4. assemble the page and write it
//!
//! Nothing is written unless every earlier stage succeeded.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::entities::ArtifactSet;
use crate::domain::ports::{
    CommandRunner, FileSystem, NoopEventSink, PipelineEvent, PipelineEventSink, Stage,
};
use crate::domain::value_objects::{ConfigWarning, ContentHash};
use crate::embed::{assemble_document, colliding_idents, PageOptions};
use crate::error::SoupResult;
use crate::infrastructure::toolchain::{BindgenOutput, CargoBuild, CompiledModule, WasmBindgen};
use crate::layout::ProjectLayout;

use super::artifacts::load_artifacts;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub snippet_count: usize,
    pub hash: ContentHash,
}

impl PipelineReport {
    /// `"1,234 KB"`
    pub fn size_display(&self) -> String {
        format!("{} KB", group_thousands(self.bytes / 1024))
    }
}

/// Format `n` with `,` between groups of three digits.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Page options for a layout: configured title, or the package name.
pub fn page_options(config: &Config, layout: &ProjectLayout) -> PageOptions {
    PageOptions {
        title: config
            .page
            .title
            .clone()
            .unwrap_or_else(|| layout.package.clone()),
        background: config.page.background.clone(),
    }
}

/// The packaging use case
pub struct Pipeline<'a, R, F> {
    config: &'a Config,
    layout: &'a ProjectLayout,
    runner: R,
    fs: F,
    events: &'a dyn PipelineEventSink,
    config_warnings: &'a [ConfigWarning],
}

impl<'a, R: CommandRunner, F: FileSystem> Pipeline<'a, R, F> {
    pub fn new(config: &'a Config, layout: &'a ProjectLayout, runner: R, fs: F) -> Self {
        Self {
            config,
            layout,
            runner,
            fs,
            events: &NoopEventSink,
            config_warnings: &[],
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: &'a dyn PipelineEventSink) -> Self {
        self.events = events;
        self
    }

    /// Warnings from loading the config, reported right after the start event
    pub fn with_config_warnings(mut self, warnings: &'a [ConfigWarning]) -> Self {
        self.config_warnings = warnings;
        self
    }

    /// All four stages.
    pub fn build(&self) -> SoupResult<PipelineReport> {
        self.started();
        let module = self.compile()?;
        self.generate_bindings(&module)?;
        let artifacts = self.load()?;
        self.write(&artifacts)
    }

    /// Stages 3 and 4 only, from whatever is already on disk.
    pub fn assemble(&self) -> SoupResult<PipelineReport> {
        self.started();
        let artifacts = self.load()?;
        self.write(&artifacts)
    }

    fn started(&self) {
        self.events.on_event(PipelineEvent::Started {
            module: self.layout.package.clone(),
            output: self.layout.output.clone(),
        });
        for warning in self.config_warnings {
            self.events
                .on_event(PipelineEvent::ConfigWarning(warning.clone()));
        }
    }

    /// Stage 1
    pub fn compile(&self) -> SoupResult<CompiledModule> {
        let step = CargoBuild::new(self.layout, &self.config.build);
        self.events.on_event(PipelineEvent::StageStarted {
            stage: Stage::Build,
        });
        self.events.on_event(PipelineEvent::Command {
            stage: Stage::Build,
            command: step.invocation().to_string(),
        });
        let module = step.run(&self.runner, &self.fs)?;
        self.events.on_event(PipelineEvent::StageFinished {
            stage: Stage::Build,
        });
        Ok(module)
    }

    /// Stage 2
    pub fn generate_bindings(&self, module: &CompiledModule) -> SoupResult<BindgenOutput> {
        let step = WasmBindgen::new(self.layout, &self.config.bindgen);
        self.events.on_event(PipelineEvent::StageStarted {
            stage: Stage::Bindgen,
        });
        self.events.on_event(PipelineEvent::Command {
            stage: Stage::Bindgen,
            command: step.invocation(module).to_string(),
        });
        let output = step.run(module, &self.runner, &self.fs)?;
        self.events.on_event(PipelineEvent::StageFinished {
            stage: Stage::Bindgen,
        });
        Ok(output)
    }

    /// Stage 3
    pub fn load(&self) -> SoupResult<ArtifactSet> {
        self.events.on_event(PipelineEvent::StageStarted { stage: Stage::Load });
        let artifacts = load_artifacts(self.layout, &self.fs)?;

        self.events.on_event(PipelineEvent::ArtifactLoaded {
            path: artifacts.binary.path.clone(),
            bytes: artifacts.binary.bytes.len(),
        });
        self.events.on_event(PipelineEvent::ArtifactLoaded {
            path: artifacts.loader.path.clone(),
            bytes: artifacts.loader.text.len(),
        });
        for snippet in &artifacts.snippets {
            self.events.on_event(PipelineEvent::ArtifactLoaded {
                path: snippet.path.clone(),
                bytes: snippet.text.len(),
            });
        }
        self.events.on_event(PipelineEvent::SnippetsDiscovered {
            count: artifacts.snippets.len(),
        });
        for ident in colliding_idents(&artifacts.snippet_refs()) {
            self.events.on_event(PipelineEvent::Warning {
                message: format!(
                    "several snippets map to the page constant 'js_url_{ident}'; the page will fail to load with a duplicate declaration"
                ),
            });
        }

        self.events
            .on_event(PipelineEvent::StageFinished { stage: Stage::Load });
        Ok(artifacts)
    }

    /// Stage 4
    pub fn write(&self, artifacts: &ArtifactSet) -> SoupResult<PipelineReport> {
        self.events.on_event(PipelineEvent::StageStarted {
            stage: Stage::Assemble,
        });

        let document = assemble_document(artifacts, &page_options(self.config, self.layout));
        self.fs.write_atomic(&self.layout.output, document.html())?;

        let report = PipelineReport {
            output: self.layout.output.clone(),
            bytes: document.len(),
            snippet_count: document.snippet_count(),
            hash: document.hash(),
        };
        self.events.on_event(PipelineEvent::StageFinished {
            stage: Stage::Assemble,
        });
        self.events.on_event(PipelineEvent::Written {
            path: report.output.clone(),
            bytes: report.bytes,
            snippet_count: report.snippet_count,
            hash: report.hash.clone(),
        });
        Ok(report)
    }
}
