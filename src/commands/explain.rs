use std::path::Path;

use anyhow::Result;
use wasm_soup::application::page_options;
use wasm_soup::infrastructure::{CargoBuild, CompiledModule, SystemRunner, WasmBindgen};

use crate::cli::LayoutArgs;
use crate::commands::project::resolve_project;

pub fn cmd_explain(
    project_dir: Option<&Path>,
    config_file: Option<&Path>,
    args: &LayoutArgs,
    json: bool,
) -> Result<()> {
    let project = resolve_project(project_dir, config_file, args)?;
    let layout = &project.layout;
    let config = &project.config;

    let build = CargoBuild::new(layout, &config.build).invocation();
    let compiled = CompiledModule {
        wasm: layout.compiled_wasm(),
    };
    let bindgen = WasmBindgen::new(layout, &config.bindgen).invocation(&compiled);
    let title = page_options(config, layout).title;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "explain",
            "layout": layout,
            "loader": layout.loader(),
            "bindgen_wasm": layout.bindgen_wasm(),
            "compiled_wasm": layout.compiled_wasm(),
            "embedded_wasm": layout.embedded_wasm(),
            "title": title,
            "exec": {
                "build": build.to_string(),
                "bindgen": bindgen.to_string(),
            },
            "warnings": project.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    for warning in &project.warnings {
        eprintln!("⚠ {}", warning);
    }

    println!("wasm-soup v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("MODULE:");
    println!("  package        {}", layout.package);
    println!("  file stem      {}", layout.stem);
    println!("  target         {}", layout.target);
    println!("  profile        {}", layout.profile.dir_name());
    println!("  embed          {}", layout.embed.as_str());
    println!("  title          {}", title);
    println!();
    println!("PATHS:");
    println!("  project        {}", layout.project_dir.display());
    println!("  compiled wasm  {}", layout.compiled_wasm().display());
    println!("  bindgen out    {}", layout.out_dir.display());
    println!("  loader         {}", layout.loader().display());
    println!("  embedded wasm  {}", layout.embedded_wasm().display());
    println!("  output         {}", layout.output.display());
    println!();
    println!("COMMANDS:");
    println!("  {}{}", build, availability(&build.program));
    println!("  {}{}", bindgen, availability(&bindgen.program));

    Ok(())
}

fn availability(program: &str) -> &'static str {
    if SystemRunner::check_available(program) {
        ""
    } else {
        "  (not found)"
    }
}
