//! Project layout - every path the pipeline reads or writes
//!
//! Resolved once from a project directory, a module name and a [`Config`];
//! nothing downstream looks at the working directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::domain::value_objects::{BuildProfile, EmbedSource};
use crate::error::{SoupError, SoupResult};

/// Resolved paths and names for one packaging run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    /// Directory cargo is run in
    pub project_dir: PathBuf,
    /// Package name, as it appears in snippet directory names
    pub package: String,
    /// File stem cargo and wasm-bindgen use (`-` replaced by `_`)
    pub stem: String,
    pub target: String,
    pub profile: BuildProfile,
    pub embed: EmbedSource,
    /// Cargo `--target-dir`
    pub target_dir: PathBuf,
    /// `<target_dir>/<target>/<profile>`
    pub profile_dir: PathBuf,
    /// wasm-bindgen `--out-dir`
    pub out_dir: PathBuf,
    /// Final page
    pub output: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout for `package` under `project_dir`.
    pub fn resolve(project_dir: &Path, package: &str, config: &Config) -> SoupResult<Self> {
        let package = package.trim();
        if !is_valid_package_name(package) {
            return Err(SoupError::InvalidModuleName {
                name: package.to_string(),
            });
        }

        let profile = config.build.profile;
        let target_dir = project_dir.join(&config.build.target_dir);
        let profile_dir = target_dir
            .join(&config.build.target)
            .join(profile.dir_name());
        let out_dir = profile_dir.join(&config.bindgen.out_subdir);
        let output = profile_dir.join(&config.page.output);

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            package: package.to_string(),
            stem: package.replace('-', "_"),
            target: config.build.target.clone(),
            profile,
            embed: config.embed.binary,
            target_dir,
            profile_dir,
            out_dir,
            output,
        })
    }

    /// `<profile_dir>/<stem>.wasm`, written by cargo
    pub fn compiled_wasm(&self) -> PathBuf {
        self.profile_dir.join(format!("{}.wasm", self.stem))
    }

    /// `<stem>_bg.wasm`: the name the loader uses for the binary
    pub fn bindgen_wasm_name(&self) -> String {
        format!("{}_bg.wasm", self.stem)
    }

    /// `<out_dir>/<stem>_bg.wasm`, written by wasm-bindgen
    pub fn bindgen_wasm(&self) -> PathBuf {
        self.out_dir.join(self.bindgen_wasm_name())
    }

    /// `<out_dir>/<stem>.js`
    pub fn loader(&self) -> PathBuf {
        self.out_dir.join(format!("{}.js", self.stem))
    }

    /// The wasm file whose bytes end up in the page
    pub fn embedded_wasm(&self) -> PathBuf {
        match self.embed {
            EmbedSource::Bindgen => self.bindgen_wasm(),
            EmbedSource::Compiler => self.compiled_wasm(),
        }
    }

    /// A snippet path as referenced by the loader, resolved against `out_dir`
    pub fn snippet(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .fold(self.out_dir.clone(), |path, part| path.join(part))
    }
}

/// Cargo package names: ASCII alphanumerics, `-` and `_`, not starting with a digit.
fn is_valid_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
