//! Content Hash Value Object
//!
//! SHA-256 of the assembled document, reported after every write so two
//! builds can be compared without diffing multi-megabyte pages.

use std::fmt;

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Compute the SHA-256 of `content`
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Compute the SHA-256 of raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(bytes);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
