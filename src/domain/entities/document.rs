//! AssembledDocument entity - the final self-contained page

use crate::domain::value_objects::ContentHash;

/// The HTML page produced by the assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    html: String,
    snippet_count: usize,
}

impl AssembledDocument {
    pub fn new(html: String, snippet_count: usize) -> Self {
        Self {
            html,
            snippet_count,
        }
    }

    /// The document text
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume into the document text
    pub fn into_html(self) -> String {
        self.html
    }

    /// Number of snippet blobs embedded in the page
    pub fn snippet_count(&self) -> usize {
        self.snippet_count
    }

    /// Size in bytes, UTF-8 encoded
    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Whole kilobytes (1024 bytes), rounded down
    pub fn size_kb(&self) -> usize {
        self.html.len() / 1024
    }

    /// SHA-256 of the document text
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.html)
    }
}
