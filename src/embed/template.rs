//! The fixed HTML skeleton
//!
//! One page layout, parameterised by [`PageOptions`]. Everything variable
//! that goes into a `<script>` has already been base64-encoded or escaped by
//! the caller.

use std::fmt::Write as _;

use super::rewrite::WASM_URL_VAR;

/// Presentation options for the generated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// CSS colour of the page background
    pub background: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "wasm-soup".to_string(),
            background: "#252526".to_string(),
        }
    }
}

/// A snippet ready to be placed in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedSnippet {
    /// Page constant holding the snippet's object URL
    pub url_var: String,
    /// Escaped snippet source
    pub source: String,
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Script lines creating one object URL per snippet.
pub fn render_snippet_blobs(snippets: &[EmbeddedSnippet]) -> String {
    let mut out = String::new();
    for snippet in snippets {
        let _ = writeln!(
            out,
            "    const {} = URL.createObjectURL(new Blob([`{}`], {{type: \"application/javascript\"}}));",
            snippet.url_var, snippet.source
        );
    }
    out
}

/// Render the complete page.
///
/// `wasm_base64` goes inside a double-quoted string; `loader` and each
/// snippet source go inside backticks.
pub fn render_page(
    page: &PageOptions,
    wasm_base64: &str,
    snippets: &[EmbeddedSnippet],
    loader: &str,
) -> String {
    let title = escape_html(&page.title);
    let background = escape_html(&page.background);
    let snippet_blobs = render_snippet_blobs(snippets);

    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>{title}</title>
        <meta content="text/html;charset=utf-8" http-equiv="Content-Type"/>
        <meta http-equiv="X-UA-Compatible" content="IE=edge">
        <meta name="viewport"
              content="minimal-ui, width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
        <meta name="apple-mobile-web-app-capable" content="yes">
        <style>
            html, body {{
                width: 100%;
                height: 100%;
                padding: 0;
                margin: 0;
                background-color: {background};
            }}

            * {{
                outline: none;
            }}
        </style>
    </head>
    <body>
    <script type="module">
    const {WASM_URL_VAR} = URL.createObjectURL(new Blob([Uint8Array.from(atob("{wasm_base64}"), c => c.charCodeAt(0))], {{type: "application/wasm"}}));
    console.log("WASM blob created");
{snippet_blobs}    const js_bg = `{loader}`;
    const js_blob_url = URL.createObjectURL(new Blob([js_bg], {{type: "application/javascript"}}));
    console.log("Bindgen js added");
    const {{ default: init }} = await import(js_blob_url);
    await init();
    console.log("Initial script done");
    </script>
    </body>
</html>
"#
    )
}
