//! Embed source value object - which wasm file ends up inside the page

use serde::{Deserialize, Serialize};

/// Which of the two wasm files on disk is embedded
///
/// The loader always names `<stem>_bg.wasm`; this only picks the bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EmbedSource {
    /// `<out_dir>/<stem>_bg.wasm`, as post-processed by wasm-bindgen (default)
    #[default]
    Bindgen,
    /// `<profile_dir>/<stem>.wasm`, straight from the compiler
    Compiler,
}

impl EmbedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedSource::Bindgen => "bindgen",
            EmbedSource::Compiler => "compiler",
        }
    }

    /// Lenient parse used for environment overrides
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bindgen" | "wasm-bindgen" => Some(EmbedSource::Bindgen),
            "compiler" | "cargo" | "raw" => Some(EmbedSource::Compiler),
            _ => None,
        }
    }
}
