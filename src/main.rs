//! wasm-soup CLI - pack a wasm-bindgen web build into one HTML page
//!
//! Usage: wasm-soup [OPTIONS] [COMMAND]
//!
//! Commands:
//!   build     Compile, run wasm-bindgen and assemble index.html (default)
//!   assemble  Assemble index.html from an existing wasm-bindgen output
//!   explain   Show every resolved path and command

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, LayoutArgs};
use commands::explain::cmd_explain;
use commands::package::{cmd_package, Mode, PackageOptions};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = PackageOptions {
        project_dir: cli.project_dir.as_deref(),
        config_file: cli.config.as_deref(),
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
    };

    match &cli.command {
        None => cmd_package(Mode::Build, options, &LayoutArgs::default()),
        Some(Commands::Build(args)) => cmd_package(Mode::Build, options, args),
        Some(Commands::Assemble(args)) => cmd_package(Mode::Assemble, options, args),
        Some(Commands::Explain(args)) => cmd_explain(
            cli.project_dir.as_deref(),
            cli.config.as_deref(),
            args,
            cli.json,
        ),
    }
}
