//! Build profile value object - which cargo profile to build and package

use serde::{Deserialize, Serialize};

/// Cargo profile the wasm module is built with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// `cargo build`
    Debug,
    /// `cargo build --release` (default)
    #[default]
    Release,
}

impl BuildProfile {
    /// Directory name cargo uses under `target/<triple>/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
        }
    }

    /// Extra cargo flag selecting this profile, if any
    pub fn cargo_flag(&self) -> Option<&'static str> {
        match self {
            BuildProfile::Debug => None,
            BuildProfile::Release => Some("--release"),
        }
    }

    /// Lenient parse used for environment overrides
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "dev" => Some(BuildProfile::Debug),
            "release" => Some(BuildProfile::Release),
            _ => None,
        }
    }
}
