//! Scenario: a full build with stand-in toolchain programs
//!
//! `cargo` and `wasm-bindgen` are replaced by shell scripts configured in
//! `wasm-soup.toml`, so the whole four-stage run happens without a real
//! toolchain.

#![cfg(unix)]

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::common::*;

/// Writes `<target-dir>/wasm32-unknown-unknown/release/game.wasm`
/// (`build --target <t> --release --target-dir <dir>`).
const FAKE_CARGO: &str = r#"mkdir -p "$6/$3/release"
printf 'wasm' > "$6/$3/release/game.wasm""#;

/// Writes the loader, the bg module and one snippet into `--out-dir`.
const FAKE_BINDGEN: &str = r#"out="$3"
mkdir -p "$out/snippets/game-abc"
cp "$1" "$out/game_bg.wasm"
printf '%s\n' "import * as s from './snippets/game-abc/inline0.js';" > "$out/game.js"
printf '%s\n' "export default async function init() { return new URL('game_bg.wasm', import.meta.url); }" >> "$out/game.js"
printf 'export const x = 1;' > "$out/snippets/game-abc/inline0.js""#;

fn configure(project: &TestProject, cargo: &Path, bindgen: &Path) {
    project.write(
        "wasm-soup.toml",
        format!(
            "[build]\nprogram = \"{}\"\n\n[bindgen]\nprogram = \"{}\"\n",
            cargo.display(),
            bindgen.display()
        ),
    );
}

/// SCENARIO: build runs both tools and writes the page
#[test]
fn scenario_full_build() {
    let project = TestProject::new();
    let cargo = project.script("fake-cargo", FAKE_CARGO);
    let bindgen = project.script("fake-bindgen", FAKE_BINDGEN);
    configure(&project, &cargo, &bindgen);

    let result = project.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Running cargo build"));
    assert!(result.stdout.contains("Running wasm-bindgen"));
    assert!(result.stdout.contains("Finished wasm-bindgen"));
    assert!(result.stdout.contains("HTML size: "));
    assert!(result.stdout.contains(" KB"));

    let html = project.read_output();
    assert!(html.contains("<title>game</title>"));
    assert!(html.contains("const js_url_abc_inline0 = "));
    assert!(embedded_loader(&html).contains("new URL('${wasm_blob_url}', import.meta.url)"));
    assert_eq!(embedded_base64(&html), "d2FzbQ==");
}

/// SCENARIO: no command means build
#[test]
fn scenario_default_command_is_build() {
    let project = TestProject::new();
    let cargo = project.script("fake-cargo", FAKE_CARGO);
    let bindgen = project.script("fake-bindgen", FAKE_BINDGEN);
    configure(&project, &cargo, &bindgen);

    let result = project.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(project.output().exists());
}

/// SCENARIO: the compiler fails; its exit code comes back and nothing else runs
#[test]
fn scenario_compiler_failure_propagates_exit_code() {
    let project = TestProject::new();
    let cargo = project.script("fake-cargo", "exit 7");
    let marker = project.home.join("bindgen-ran");
    let bindgen = project.script(
        "fake-bindgen",
        &format!("touch \"{}\"", marker.display()),
    );
    configure(&project, &cargo, &bindgen);

    let result = project.run(&["build"]);

    assert_eq!(result.exit_code, 7, "{}", result.combined_output());
    assert!(result.stderr.contains("failed with exit code 7"));
    assert!(!marker.exists());
    assert!(!project.output().exists());
}

/// SCENARIO: bindgen is not installed
#[test]
fn scenario_missing_bindgen_exits_one() {
    let project = TestProject::new();
    let cargo = project.script("fake-cargo", FAKE_CARGO);
    configure(&project, &cargo, &project.home.join("no-such-wasm-bindgen"));

    let result = project.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("cargo install wasm-bindgen-cli"));
    assert!(!project.output().exists());
}

/// SCENARIO: CI consumes the NDJSON stream
#[test]
fn scenario_json_event_stream() {
    let project = TestProject::new();
    let cargo = project.script("fake-cargo", FAKE_CARGO);
    let bindgen = project.script("fake-bindgen", FAKE_BINDGEN);
    configure(&project, &cargo, &bindgen);

    let result = project.run(&["build", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<Value> = result
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "build");
    assert_eq!(events[0]["module"], "game");

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["snippets"], 1);
    assert!(last["hash"].as_str().unwrap().starts_with("sha256:"));

    let html = fs::read(project.output()).unwrap();
    assert_eq!(last["bytes"], html.len());
}
