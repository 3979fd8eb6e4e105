//! Discovery of inline snippet scripts referenced from the loader
//!
//! `wasm-bindgen` writes `#[wasm_bindgen(inline_js = ...)]` blocks to
//! `snippets/<package>-<hash>/inline<N>.js` next to the loader, and imports
//! them with a quoted relative path:
//!
//! ```text
//! import * as __wbg_star0 from './snippets/my-game-0a1b2c3d/inline0.js';
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static SNIPPET_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'\./(snippets/([^/']+)/inline\d+\.js)'").expect("snippet pattern is valid")
});

/// One snippet referenced from the loader script
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnippetRef {
    /// Path relative to the bindgen output directory
    pub path: String,
    /// Derived short name: the snippet directory name after `<package>-`
    pub name: String,
}

impl SnippetRef {
    /// The literal that appears in the loader's import statement.
    pub fn literal(&self) -> String {
        format!("./{}", self.path)
    }

    /// JavaScript identifier fragment: derived short name plus file stem.
    ///
    /// One snippet directory holds every `inline<N>.js` of a crate, so the
    /// file stem keeps those apart. Distinct directories whose names sanitize
    /// to the same text still collide (see [`colliding_idents`]).
    pub fn ident(&self) -> String {
        let file = self.path.rsplit('/').next().unwrap_or_default();
        let stem = file.strip_suffix(".js").unwrap_or(file);
        format!("{}_{}", self.name, stem)
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }

    /// Name of the page-level constant holding this snippet's object URL.
    pub fn url_var(&self) -> String {
        format!("js_url_{}", self.ident())
    }
}

/// Find every snippet the loader imports for `package`.
///
/// Results are de-duplicated by path and ordered by first appearance.
/// Snippets belonging to other packages are ignored.
pub fn discover_snippets(loader: &str, package: &str) -> Vec<SnippetRef> {
    let prefix = format!("{package}-");
    let mut seen = HashSet::new();
    let mut snippets = Vec::new();

    for caps in SNIPPET_IMPORT.captures_iter(loader) {
        let path = &caps[1];
        let Some(name) = caps[2].strip_prefix(&prefix) else {
            continue;
        };
        if name.is_empty() || !seen.insert(path.to_string()) {
            continue;
        }
        snippets.push(SnippetRef {
            path: path.to_string(),
            name: name.to_string(),
        });
    }

    snippets
}

/// Identifiers shared by more than one distinct snippet.
///
/// Such snippets would declare the same page constant twice. This is only
/// reported; the document is still assembled.
pub fn colliding_idents(snippets: &[SnippetRef]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for snippet in snippets {
        *counts.entry(snippet.ident()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(ident, _)| ident)
        .collect()
}
