//! Escaping must run backslash first, and before placeholders are inserted.

use wasm_soup::embed::{escape_template_literal, prepare_loader, unescape_template_literal};

/// Escaping backticks before backslashes turned `` ` `` into `` \\` ``,
/// which ends the template literal.
#[test]
fn regression_backslash_escaped_before_backtick() {
    assert_eq!(escape_template_literal("`"), "\\`");
    assert_eq!(escape_template_literal("\\`"), "\\\\\\`");
    assert_eq!(escape_template_literal("a\\$b"), "a\\\\\\$b");
    assert_eq!(unescape_template_literal("\\\\\\`"), "\\`");
}

/// Escaping after rewriting turned `${wasm_blob_url}` into `\${wasm_blob_url}`,
/// so the browser fetched a file literally named that.
#[test]
fn regression_placeholders_survive_escaping() {
    let loader = "const path = `${base}/x`; new URL('game_bg.wasm', import.meta.url);";
    let prepared = prepare_loader(loader, "game_bg.wasm", &[]);

    assert!(prepared.contains("new URL('${wasm_blob_url}', import.meta.url)"));
    assert!(prepared.contains("const path = \\`\\${base}/x\\`;"));
    assert!(!prepared.contains("\\${wasm_blob_url}"));
}

/// Loader text that mentions `</script>` inside a string ended the page's
/// module script early.
#[test]
fn regression_script_close_in_loader() {
    let loader = "const tag = '</script>'; new URL('game_bg.wasm', import.meta.url);";
    let prepared = prepare_loader(loader, "game_bg.wasm", &[]);

    assert!(!prepared.contains("</script"));
    assert!(prepared.contains("<\\/script>"));
}
