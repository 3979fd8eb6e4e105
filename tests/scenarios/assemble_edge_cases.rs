//! Scenario: assembling unusual wasm-bindgen output
//!
//! Each test lays down bindgen output by hand and assembles it, either
//! through the library or through `wasm-soup assemble`.

use std::fs;

use crate::common::*;

use wasm_soup::embed::{decode_binary, unescape_template_literal};
use wasm_soup::infrastructure::{LocalFs, SystemRunner};
use wasm_soup::{Config, Pipeline, PipelineReport, ProjectLayout};

fn assemble(project: &TestProject) -> PipelineReport {
    let config = Config::default();
    let layout = ProjectLayout::resolve(&project.dir, "game", &config).unwrap();
    Pipeline::new(&config, &layout, SystemRunner::new(), LocalFs::new())
        .assemble()
        .unwrap()
}

/// SCENARIO: a zero-filled module with no snippets
#[test]
fn scenario_zero_filled_module() {
    let project = TestProject::new();
    project.write_bindgen_output("game", PLAIN_LOADER, &[0u8; 1000]);

    let report = assemble(&project);
    let html = project.read_output();

    assert_eq!(report.snippet_count, 0);
    assert_eq!(report.bytes, html.len());
    assert_eq!(decode_binary(embedded_base64(&html)).unwrap(), vec![0u8; 1000]);
    assert!(!html.contains("_bg.wasm"));
    assert_eq!(html.matches("<script").count(), 1);
    assert!(!html.contains("js_url_"));
}

/// SCENARIO: script text that looks like markup leaves the skeleton intact
#[test]
fn scenario_markup_in_scripts_keeps_tags_balanced() {
    let project = TestProject::new();
    let extra = "const closer = `</script>`;\n\
                 const shout = '</SCRIPT >';\n\
                 const comment = '<!--<script>';\n\
                 const tpl = `${closer}${comment}`;\n\
                 import * as a from './snippets/game-abc/inline0.js';\n";
    let loader = format!("{extra}{PLAIN_LOADER}");
    project.write_bindgen_output("game", &loader, b"\0asm");
    project.write_snippet(
        "snippets/game-abc/inline0.js",
        "export const s = `<!--<script></script>-->`;",
    );

    assemble(&project);
    let html = project.read_output();
    let lower = html.to_ascii_lowercase();

    for tag in ["<html>", "</html>", "<head>", "</head>", "<body>", "</body>"] {
        assert_eq!(html.matches(tag).count(), 1, "{tag} in:\n{html}");
    }
    assert_eq!(html.matches("<script type=\"module\">").count(), 1);
    assert_eq!(lower.matches("</script").count(), 1);
    assert!(!html.contains("<!--"));

    let order = [
        "<html>",
        "<head>",
        "</head>",
        "<body>",
        "<script type=\"module\">",
        "</script>",
        "</body>",
        "</html>",
    ];
    let positions: Vec<usize> = order.iter().map(|tag| html.find(tag).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    let embedded = unescape_template_literal(embedded_loader(&html));
    assert!(embedded.starts_with("const closer = `</script>`;"));
    assert!(embedded.contains("const comment = '<!--<script>';"));
    assert!(embedded.contains("const tpl = `${closer}${comment}`;"));
}

/// SCENARIO: an empty module still produces a page
#[test]
fn scenario_empty_module() {
    let project = TestProject::new();
    project.write_bindgen_output("game", PLAIN_LOADER, b"");

    assemble(&project);
    let html = project.read_output();

    assert_eq!(embedded_base64(&html), "");
}

/// SCENARIO: the loader imports the same snippet twice
#[test]
fn scenario_duplicate_snippet_import() {
    let project = TestProject::new();
    let loader = format!(
        "import * as a from './snippets/game-abc/inline0.js';\n\
         import {{ x }} from './snippets/game-abc/inline0.js';\n{PLAIN_LOADER}"
    );
    project.write_bindgen_output("game", &loader, b"\0asm");
    project.write_snippet("snippets/game-abc/inline0.js", "export const x = `${1}`;");

    let report = assemble(&project);
    let html = project.read_output();

    assert_eq!(report.snippet_count, 1);
    assert_eq!(html.matches("const js_url_abc_inline0 = ").count(), 1);
    assert_eq!(
        embedded_loader(&html).matches("'${js_url_abc_inline0}'").count(),
        2
    );
    assert!(html.contains("export const x = \\`\\${1}\\`;"));
}

/// SCENARIO: snippets of another crate are left alone
#[test]
fn scenario_foreign_snippet_is_not_embedded() {
    let project = TestProject::new();
    let loader = format!("import * as a from './snippets/other-abc/inline0.js';\n{PLAIN_LOADER}");
    project.write_bindgen_output("game", &loader, b"\0asm");

    let report = assemble(&project);

    assert_eq!(report.snippet_count, 0);
    assert!(embedded_loader(&project.read_output()).contains("'./snippets/other-abc/inline0.js'"));
}

/// SCENARIO: two snippet directories map to the same page constant
#[test]
fn scenario_colliding_snippet_names_warn() {
    let project = TestProject::new();
    let loader = format!(
        "import * as a from './snippets/game-a-b/inline0.js';\n\
         import * as b from './snippets/game-a_b/inline0.js';\n{PLAIN_LOADER}"
    );
    project.write_bindgen_output("game", &loader, b"\0asm");
    project.write_snippet("snippets/game-a-b/inline0.js", "export const a = 1;");
    project.write_snippet("snippets/game-a_b/inline0.js", "export const b = 2;");

    let result = project.run(&["assemble"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("js_url_a_b_inline0"), "{}", result.stderr);
    assert!(
        result.stderr.contains("duplicate declaration"),
        "{}",
        result.stderr
    );
    assert!(project.output().exists());
}

/// SCENARIO: the loader imports a snippet that is not on disk
#[test]
fn scenario_missing_snippet_writes_nothing() {
    let project = TestProject::new();
    let loader = format!("import * as a from './snippets/game-abc/inline0.js';\n{PLAIN_LOADER}");
    project.write_bindgen_output("game", &loader, b"\0asm");

    let result = project.run(&["assemble"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("snippet script not found"),
        "{}",
        result.stderr
    );
    assert!(!project.output().exists());
}

/// SCENARIO: a failed run keeps the previous page
#[test]
fn scenario_failed_run_keeps_previous_page() {
    let project = TestProject::new();
    project.write_bindgen_output("game", PLAIN_LOADER, b"\0asm");
    assert!(project.run(&["assemble"]).success);
    let before = project.read_output();

    fs::remove_file(project.out_dir().join("game.js")).unwrap();
    let result = project.run(&["assemble"]);

    assert!(!result.success);
    assert!(result.stderr.contains("loader script not found"));
    assert_eq!(project.read_output(), before);
}

/// SCENARIO: the raw compiler output is embedded instead of the bindgen one
#[test]
fn scenario_embed_compiler_output() {
    let project = TestProject::new();
    project.write_bindgen_output("game", PLAIN_LOADER, b"bindgen");
    project.write(
        "target/wasm32-unknown-unknown/release/game.wasm",
        b"compiler",
    );

    let result = project.run(&["assemble", "--embed", "compiler"]);

    assert!(result.success, "{}", result.combined_output());
    let html = project.read_output();
    assert_eq!(decode_binary(embedded_base64(&html)).unwrap(), b"compiler");
}
