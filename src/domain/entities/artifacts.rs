//! Artifacts read from the build output directory
//!
//! All three are transient: loaded once per run, never written back.

use std::path::PathBuf;

use crate::embed::SnippetRef;

/// The compiled wasm module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryArtifact {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// The bindgen-generated JavaScript loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderScript {
    pub path: PathBuf,
    pub text: String,
    /// File name of the binary as the loader spells it (`<stem>_bg.wasm`)
    pub binary_literal: String,
}

/// An inline snippet imported by the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetScript {
    pub reference: SnippetRef,
    pub path: PathBuf,
    pub text: String,
}

/// Everything the assembler needs for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub binary: BinaryArtifact,
    pub loader: LoaderScript,
    pub snippets: Vec<SnippetScript>,
}

impl ArtifactSet {
    /// References of all loaded snippets, in discovery order.
    pub fn snippet_refs(&self) -> Vec<SnippetRef> {
        self.snippets.iter().map(|s| s.reference.clone()).collect()
    }
}
