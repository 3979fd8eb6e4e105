//! Common test utilities for wasm-soup integration tests.
//!
//! This module provides:
//! - `TestProject`: an isolated crate directory with a fake home
//! - helpers to lay down wasm-bindgen output and fake toolchain scripts
//! - `TestResult`: captured output of a CLI run

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Loader text as wasm-bindgen emits it for a crate without snippets
pub const PLAIN_LOADER: &str = r#"let wasm;

async function __wbg_init(module_or_path) {
    if (typeof module_or_path === 'undefined') {
        module_or_path = new URL('game_bg.wasm', import.meta.url);
    }
    const { instance } = await WebAssembly.instantiateStreaming(fetch(module_or_path), {});
    wasm = instance.exports;
    return wasm;
}

export default __wbg_init;
"#;

/// Result of running the wasm-soup binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// A crate directory named `game` inside a temp dir, with its own home
pub struct TestProject {
    _root: TempDir,
    pub dir: PathBuf,
    pub home: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        Self::named("game")
    }

    pub fn named(name: &str) -> Self {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(name);
        let home = root.path().join("home");
        fs::create_dir_all(&dir).unwrap();
        fs::create_dir_all(&home).unwrap();
        let dir = dir.canonicalize().unwrap();
        Self {
            _root: root,
            dir,
            home,
        }
    }

    /// `target/wasm32-unknown-unknown/release`
    pub fn profile_dir(&self) -> PathBuf {
        self.dir.join("target/wasm32-unknown-unknown/release")
    }

    /// `target/wasm32-unknown-unknown/release/wasm_soup`
    pub fn out_dir(&self) -> PathBuf {
        self.profile_dir().join("wasm_soup")
    }

    pub fn output(&self) -> PathBuf {
        self.profile_dir().join("index.html")
    }

    pub fn write(&self, relative: impl AsRef<Path>, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Lay down what `wasm-bindgen --target web` writes for `stem`.
    pub fn write_bindgen_output(&self, stem: &str, loader: &str, wasm: &[u8]) {
        let out = self.out_dir();
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join(format!("{stem}.js")), loader).unwrap();
        fs::write(out.join(format!("{stem}_bg.wasm")), wasm).unwrap();
    }

    pub fn write_snippet(&self, relative: &str, source: &str) {
        let path = self.out_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).unwrap()
    }

    /// Write an executable shell script and return its path.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.home.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// Run the wasm-soup binary in the project directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_wasm-soup"))
            .current_dir(&self.dir)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("WASM_SOUP_NAME")
            .env_remove("WASM_SOUP_PROFILE")
            .env_remove("WASM_SOUP_EMBED")
            .env_remove("WASM_SOUP_OUT_SUBDIR")
            .env_remove("WASM_SOUP_VERBOSITY")
            .args(args)
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Text between `atob("` and the closing quote in a page.
pub fn embedded_base64(html: &str) -> &str {
    let start = html.find("atob(\"").unwrap() + "atob(\"".len();
    let end = start + html[start..].find('"').unwrap();
    &html[start..end]
}

/// Text of the loader template literal in a page.
pub fn embedded_loader(html: &str) -> &str {
    let start = html.find("const js_bg = `").unwrap() + "const js_bg = `".len();
    let end = start + html[start..].find("`;\n    const js_blob_url").unwrap();
    &html[start..end]
}
