//! Human-readable progress for a packaging run

use std::cell::RefCell;
use std::path::PathBuf;

use wasm_soup::application::group_thousands;
use wasm_soup::domain::ports::{PipelineEvent, PipelineEventSink, Stage};

use crate::ui::context::UiContext;
use crate::ui::theme::{bold, dim, Icon};

/// Where a console line goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Prints pipeline events as progress lines
pub struct ConsoleEventSink {
    ui: UiContext,
    output: RefCell<Option<PathBuf>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            output: RefCell::new(None),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn detail(&self, text: &str) -> String {
        format!("  {} {}", self.icon(Icon::Arrow), dim(text, self.ui.color))
    }

    /// The line an event produces, if any.
    pub fn render(&self, event: &PipelineEvent) -> Option<(Stream, String)> {
        let verbose = self.ui.verbose();

        // Warnings are shown even in quiet mode.
        match event {
            PipelineEvent::ConfigWarning(warning) => {
                return Some((
                    Stream::Stderr,
                    format!("{} {}", self.icon(Icon::Warning), warning),
                ));
            }
            PipelineEvent::Warning { message } => {
                return Some((
                    Stream::Stderr,
                    format!("{} {}", self.icon(Icon::Warning), message),
                ));
            }
            _ if self.ui.quiet() => return None,
            _ => {}
        }

        let line = match event {
            PipelineEvent::Started { module, output } => {
                *self.output.borrow_mut() = Some(output.clone());
                format!(
                    "{} wasm-soup {}",
                    self.icon(Icon::Package),
                    bold(module, self.ui.color)
                )
            }
            PipelineEvent::StageStarted { stage } => match stage {
                Stage::Build => format!("{} Running cargo build", self.icon(Icon::Progress)),
                Stage::Bindgen => format!("{} Running wasm-bindgen", self.icon(Icon::Progress)),
                Stage::Load if verbose => {
                    format!("{} Loading artifacts", self.icon(Icon::Progress))
                }
                Stage::Load => return None,
                Stage::Assemble => {
                    let output = self
                        .output
                        .borrow()
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "page".to_string());
                    format!("{} Assembling {}", self.icon(Icon::Progress), output)
                }
            },
            PipelineEvent::Command { command, .. } if verbose => self.detail(command),
            PipelineEvent::StageFinished { stage } => match stage {
                Stage::Build => format!("{} Finished cargo build", self.icon(Icon::Success)),
                Stage::Bindgen => format!("{} Finished wasm-bindgen", self.icon(Icon::Success)),
                Stage::Load | Stage::Assemble => return None,
            },
            PipelineEvent::ArtifactLoaded { path, bytes } if verbose => {
                self.detail(&format!("{} ({} bytes)", path.display(), group_thousands(*bytes)))
            }
            PipelineEvent::SnippetsDiscovered { count } if verbose => {
                let noun = if *count == 1 { "snippet" } else { "snippets" };
                self.detail(&format!("{count} {noun}"))
            }
            PipelineEvent::Written { bytes, hash, .. } => {
                let mut line = format!(
                    "{} HTML size: {} KB",
                    self.icon(Icon::Success),
                    group_thousands(bytes / 1024)
                );
                if verbose {
                    line.push('\n');
                    line.push_str(&self.detail(hash.as_str()));
                }
                line
            }
            _ => return None,
        };

        Some((Stream::Stdout, line))
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        match self.render(&event) {
            Some((Stream::Stdout, line)) => println!("{line}"),
            Some((Stream::Stderr, line)) => eprintln!("{line}"),
            None => {}
        }
    }
}
