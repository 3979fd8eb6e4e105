use wasm_soup::{ArtifactKind, SoupError};

use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{dim, Icon};

/// A one-line fix suggestion for errors that have an obvious one.
pub fn hint(err: &SoupError) -> Option<String> {
    match err {
        SoupError::ToolUnavailable { tool, .. } if tool.contains("wasm-bindgen") => Some(
            "install it with: cargo install wasm-bindgen-cli (the version must match the wasm-bindgen crate)"
                .to_string(),
        ),
        SoupError::ToolUnavailable { tool, .. } => Some(format!("is '{tool}' on your PATH?")),
        SoupError::MissingArtifact {
            kind: ArtifactKind::Binary | ArtifactKind::Loader,
            ..
        } => Some("run 'wasm-soup build' first, or check --name and --out-subdir".to_string()),
        SoupError::MissingArtifact {
            kind: ArtifactKind::Snippet,
            ..
        } => Some("the loader imports a snippet wasm-bindgen did not write; rebuild".to_string()),
        SoupError::InvalidModuleName { .. } => {
            Some("pass the crate's package name with --name".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );
    if let Some(hint) = err.downcast_ref::<SoupError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            dim(&hint, supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
            "exit_code": exit_code(err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}

/// Process exit status for an error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SoupError>()
        .map(SoupError::exit_code)
        .unwrap_or(1)
}
