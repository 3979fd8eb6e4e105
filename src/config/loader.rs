//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildProfile, ConfigWarning, EmbedSource};
use crate::error::{SoupError, SoupResult};

use super::types::{Config, Verbosity};

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SoupResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SoupError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.split('.').next_back().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                file: path.to_path_buf(),
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a project.
///
/// The first file found wins, there is no merging:
/// 1. `explicit` (must exist)
/// 2. `<project_root>/wasm-soup.toml`
/// 3. `<user config dir>/wasm-soup/config.toml`
/// 4. built-in defaults
///
/// Environment overrides are applied on top in every case. A config file
/// that exists but does not parse is an error.
pub fn load_or_default(
    project_root: &Path,
    explicit: Option<&Path>,
) -> SoupResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(project_root.join(Config::FILE_NAME)),
        user_config_path(),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config dir>/wasm-soup/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wasm-soup").join("config.toml"))
}

/// Apply environment variable overrides (WASM_SOUP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(name) = get_env("WASM_SOUP_NAME").filter(|n| !n.trim().is_empty()) {
        config.module.name = Some(name.trim().to_string());
    }

    if let Some(profile) = get_env("WASM_SOUP_PROFILE").and_then(|p| BuildProfile::parse(&p)) {
        config.build.profile = profile;
    }

    if let Some(embed) = get_env("WASM_SOUP_EMBED").and_then(|e| EmbedSource::parse(&e)) {
        config.embed.binary = embed;
    }

    if let Some(subdir) = get_env("WASM_SOUP_OUT_SUBDIR").filter(|s| !s.trim().is_empty()) {
        config.bindgen.out_subdir = subdir.trim().to_string();
    }

    if let Some(verbosity) = get_env("WASM_SOUP_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" | "debug" => Verbosity::Verbose,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "module",
        "name",
        "build",
        "program",
        "target",
        "target_dir",
        "profile",
        "args",
        "bindgen",
        "out_subdir",
        "embed",
        "binary",
        "page",
        "title",
        "background",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist > 0 && dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
