//! Literal-to-placeholder rewriting of the loader script
//!
//! The loader refers to the binary and its snippets by relative file name.
//! Once embedded in a template literal those names are replaced with `${...}`
//! placeholders that evaluate to object URLs when the page runs.

use super::snippets::SnippetRef;

/// Name of the page constant holding the binary module's object URL.
pub const WASM_URL_VAR: &str = "wasm_blob_url";

/// A single rewrite rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Exact text to look for
    pub literal: String,
    /// Text to put in its place
    pub placeholder: String,
}

impl Substitution {
    pub fn new(literal: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Rule replacing `literal` with a `${var}` template placeholder.
    pub fn to_var(literal: impl Into<String>, var: &str) -> Self {
        Self::new(literal, format!("${{{var}}}"))
    }
}

/// Apply `substitutions` to `text`, in order.
///
/// Each rule replaces every occurrence of its literal. Later rules see the
/// output of earlier ones. Empty literals are skipped.
pub fn rewrite_references(text: &str, substitutions: &[Substitution]) -> String {
    substitutions
        .iter()
        .filter(|sub| !sub.literal.is_empty())
        .fold(text.to_string(), |acc, sub| {
            acc.replace(&sub.literal, &sub.placeholder)
        })
}

/// The rules for a loader: binary file name first, then each snippet path.
pub fn loader_substitutions(binary_file_name: &str, snippets: &[SnippetRef]) -> Vec<Substitution> {
    let mut subs = Vec::with_capacity(snippets.len() + 1);
    subs.push(Substitution::to_var(binary_file_name, WASM_URL_VAR));
    subs.extend(
        snippets
            .iter()
            .map(|snippet| Substitution::to_var(snippet.literal(), &snippet.url_var())),
    );
    subs
}
