//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BuildProfile, ConfigWarning, EmbedSource};
use crate::error::SoupResult;

use super::loader;

/// Module naming
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Package name; the project directory name when unset
    #[serde(default)]
    pub name: Option<String>,
}

/// `cargo build` settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    #[serde(default = "default_cargo")]
    pub program: String,

    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    #[serde(default)]
    pub profile: BuildProfile,

    /// Extra arguments appended to `cargo build`
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_cargo(),
            target: default_target(),
            target_dir: default_target_dir(),
            profile: BuildProfile::default(),
            args: Vec::new(),
        }
    }
}

fn default_cargo() -> String {
    "cargo".to_string()
}

fn default_target() -> String {
    "wasm32-unknown-unknown".to_string()
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("target")
}

/// `wasm-bindgen` settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BindgenConfig {
    #[serde(default = "default_bindgen")]
    pub program: String,

    /// Output directory name, inside the profile directory
    #[serde(default = "default_out_subdir")]
    pub out_subdir: String,
}

impl Default for BindgenConfig {
    fn default() -> Self {
        Self {
            program: default_bindgen(),
            out_subdir: default_out_subdir(),
        }
    }
}

fn default_bindgen() -> String {
    "wasm-bindgen".to_string()
}

fn default_out_subdir() -> String {
    "wasm_soup".to_string()
}

/// What gets embedded
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmbedConfig {
    #[serde(default)]
    pub binary: EmbedSource,
}

/// Generated page settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    /// Page title; the module name when unset
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default = "default_background")]
    pub background: String,

    /// Output file name, inside the profile directory
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: None,
            background: default_background(),
            output: default_output(),
        }
    }
}

fn default_background() -> String {
    "#252526".to_string()
}

fn default_output() -> String {
    "index.html".to_string()
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub module: ModuleConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub bindgen: BindgenConfig,

    #[serde(default)]
    pub embed: EmbedConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Project config file name
    pub const FILE_NAME: &'static str = "wasm-soup.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SoupResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SoupResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from explicit path, project config, user config, or defaults,
    /// then apply environment overrides
    pub fn load_or_default(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> SoupResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root, explicit)
    }

    /// Apply environment variable overrides (WASM_SOUP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
