//! Artifact embedding
//!
//! Turns a loaded [`ArtifactSet`] into one self-contained HTML page:
//!
//! 1. base64-encode the wasm module
//! 2. escape the loader and every snippet for a template literal
//! 3. rewrite the loader's file references into `${...}` placeholders
//! 4. interpolate everything into the page skeleton
//!
//! Escaping always happens before rewriting; the placeholders must stay
//! unescaped to be evaluated by the browser.

mod encoding;
mod escaping;
mod rewrite;
mod snippets;
mod template;

pub use encoding::{decode_binary, encode_binary};
pub use escaping::{
    escape_for_embedding, escape_template_literal, guard_script_close, unescape_template_literal,
};
pub use rewrite::{loader_substitutions, rewrite_references, Substitution, WASM_URL_VAR};
pub use snippets::{colliding_idents, discover_snippets, SnippetRef};
pub use template::{escape_html, render_page, render_snippet_blobs, EmbeddedSnippet, PageOptions};

use crate::domain::entities::{ArtifactSet, AssembledDocument};

/// Escape and rewrite the loader text for embedding.
pub fn prepare_loader(loader: &str, binary_literal: &str, snippets: &[SnippetRef]) -> String {
    let escaped = escape_for_embedding(loader);
    rewrite_references(&escaped, &loader_substitutions(binary_literal, snippets))
}

/// Build the page for `artifacts`. Never fails.
pub fn assemble_document(artifacts: &ArtifactSet, page: &PageOptions) -> AssembledDocument {
    let wasm_base64 = encode_binary(&artifacts.binary.bytes);

    let snippets: Vec<EmbeddedSnippet> = artifacts
        .snippets
        .iter()
        .map(|snippet| EmbeddedSnippet {
            url_var: snippet.reference.url_var(),
            source: escape_for_embedding(&snippet.text),
        })
        .collect();

    let loader = prepare_loader(
        &artifacts.loader.text,
        &artifacts.loader.binary_literal,
        &artifacts.snippet_refs(),
    );

    let html = render_page(page, &wasm_base64, &snippets, &loader);
    AssembledDocument::new(html, snippets.len())
}
