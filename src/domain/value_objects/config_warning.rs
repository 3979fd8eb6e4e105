//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while loading `wasm-soup.toml`.
///
/// Currently only unknown keys; the build still runs with the keys ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (`page.titel`)
    pub key: String,
    /// Config file the key was found in
    pub file: PathBuf,
    /// 1-indexed line, when the key text could be located
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}
