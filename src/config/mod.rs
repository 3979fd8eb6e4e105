//! Configuration module for wasm-soup
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WASM_SOUP_*)
//! 3. Project config (wasm-soup.toml) or `--config <file>`
//! 4. User config (~/.config/wasm-soup/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, with_env_overrides_from};
pub use types::{
    BindgenConfig, BuildConfig, ColorMode, Config, EmbedConfig, ModuleConfig, OutputConfig,
    PageConfig, Verbosity,
};
