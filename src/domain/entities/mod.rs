//! Domain entities

mod artifacts;
mod document;

pub use artifacts::{ArtifactSet, BinaryArtifact, LoaderScript, SnippetScript};
pub use document::AssembledDocument;
