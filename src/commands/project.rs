//! Project resolution at the CLI boundary
//!
//! The library never looks at the working directory; this is the only
//! place the module name is derived from a directory name.

use std::path::Path;

use anyhow::{Context, Result};
use wasm_soup::config::ConfigWarning;
use wasm_soup::{Config, ProjectLayout};

use crate::cli::LayoutArgs;

/// Everything a command needs to run
pub struct Project {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    pub layout: ProjectLayout,
}

pub fn resolve_project(
    project_dir: Option<&Path>,
    config_file: Option<&Path>,
    args: &LayoutArgs,
) -> Result<Project> {
    let dir = match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", dir.display()))?;

    let (mut config, warnings) = Config::load_or_default(&dir, config_file)?;
    args.apply(&mut config);

    let name = match &config.module.name {
        Some(name) => name.clone(),
        None => directory_name(&dir).with_context(|| {
            format!(
                "Cannot derive a module name from {}; pass --name",
                dir.display()
            )
        })?,
    };

    let layout = ProjectLayout::resolve(&dir, &name, &config)?;
    Ok(Project {
        config,
        warnings,
        layout,
    })
}

fn directory_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}
