use std::path::Path;

use anyhow::Result;
use wasm_soup::domain::ports::PipelineEventSink;
use wasm_soup::infrastructure::{JsonEventSink, LocalFs, SystemRunner};
use wasm_soup::Pipeline;

use crate::cli::{ColorWhen, LayoutArgs};
use crate::commands::project::resolve_project;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// Which stages to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// cargo build, wasm-bindgen, load, assemble
    Build,
    /// load, assemble
    Assemble,
}

impl Mode {
    fn command(&self) -> &'static str {
        match self {
            Mode::Build => "build",
            Mode::Assemble => "assemble",
        }
    }
}

pub struct PackageOptions<'a> {
    pub project_dir: Option<&'a Path>,
    pub config_file: Option<&'a Path>,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

pub fn cmd_package(mode: Mode, options: PackageOptions<'_>, args: &LayoutArgs) -> Result<()> {
    let project = resolve_project(options.project_dir, options.config_file, args)?;
    let ui = UiContext::new(options.json, options.verbose, options.color, &project.config);

    let sink: Box<dyn PipelineEventSink> = if options.json {
        Box::new(JsonEventSink::stdout(mode.command()))
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };

    // NDJSON owns stdout; tool output goes to stderr.
    let runner = SystemRunner::new().with_stdout_to_stderr(options.json);
    let pipeline = Pipeline::new(&project.config, &project.layout, runner, LocalFs::new())
        .with_events(sink.as_ref())
        .with_config_warnings(&project.warnings);

    match mode {
        Mode::Build => pipeline.build()?,
        Mode::Assemble => pipeline.assemble()?,
    };
    Ok(())
}
