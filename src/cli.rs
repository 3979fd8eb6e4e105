use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wasm_soup::domain::value_objects::{BuildProfile, EmbedSource};
use wasm_soup::Config;

/// wasm-soup - pack a wasm-bindgen web build into one HTML page
#[derive(Parser, Debug)]
#[command(name = "wasm-soup")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'wasm-soup' without a command to build and assemble.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows tool command lines and artifact paths)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Crate directory to package (default: current directory)
    #[arg(short = 'C', long = "project-dir", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Config file to use instead of wasm-soup.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile, run wasm-bindgen and assemble index.html (default)
    Build(LayoutArgs),

    /// Assemble index.html from an existing wasm-bindgen output
    Assemble(LayoutArgs),

    /// Show every resolved path and command without running anything
    Explain(LayoutArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Flags that change where artifacts are looked for
#[derive(Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Package name (default: [module] name, then the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Use the debug profile
    #[arg(long, conflicts_with = "release")]
    pub debug: bool,

    /// Use the release profile
    #[arg(long)]
    pub release: bool,

    /// Which wasm file to embed
    #[arg(long, value_enum)]
    pub embed: Option<EmbedSource>,

    /// wasm-bindgen output directory, relative to the profile directory
    #[arg(long)]
    pub out_subdir: Option<String>,

    /// Page title (default: package name)
    #[arg(long)]
    pub title: Option<String>,
}

impl LayoutArgs {
    /// Apply flags on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.module.name = Some(name.clone());
        }
        if self.debug {
            config.build.profile = BuildProfile::Debug;
        } else if self.release {
            config.build.profile = BuildProfile::Release;
        }
        if let Some(embed) = self.embed {
            config.embed.binary = embed;
        }
        if let Some(out_subdir) = &self.out_subdir {
            config.bindgen.out_subdir = out_subdir.clone();
        }
        if let Some(title) = &self.title {
            config.page.title = Some(title.clone());
        }
    }
}
