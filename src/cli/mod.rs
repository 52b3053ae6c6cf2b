//! The Runic Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{fs, path::Path, process};

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, warn};

use crate::cli::args::{Command, RunicArgs};
use crate::config::Config;
use crate::discovery::discover_rune_files;
use crate::engine::Transpiler;
use crate::{logging, repl, suggest, validation};

pub mod args;
pub mod diagnostics;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = RunicArgs::parse();

    let config = match Config::discover(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => exit_with(miette::Report::new(err)),
    };
    if let Err(err) = logging::init(&logging::level_for(args.verbose, &config.log_level)) {
        eprintln!("warning: logging disabled: {}", err);
    }
    debug!(?config, "loaded configuration");

    let transpiler = Transpiler::with_config(&config);
    let color = output::color_choice(args.no_color);

    let result = match args.command {
        Command::Transpile {
            file,
            json,
            highlight,
        } => handle_transpile(&transpiler, &file, json, highlight, &config, color),
        Command::Compile { file, output } => {
            handle_compile(&transpiler, &file, output.as_deref())
        }
        Command::Check { path } => handle_check(&transpiler, &path, color),
        Command::Runes => {
            output::print_rune_table(transpiler.table());
            Ok(())
        }
        Command::Suggest { prefix } => {
            output::print_suggestions(&suggest::suggest(transpiler.table(), &prefix));
            Ok(())
        }
        Command::Repl => {
            repl::run_repl(transpiler, color);
            Ok(())
        }
    };

    if let Err(report) = result {
        exit_with(report);
    }
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    process::exit(1);
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))
}

/// Handles the `transpile` subcommand.
fn handle_transpile(
    transpiler: &Transpiler,
    path: &Path,
    json: bool,
    highlight: bool,
    config: &Config,
    color: ColorChoice,
) -> Result<()> {
    let source = read_source(path)?;
    let result = transpiler.transpile_named(&path.display().to_string(), &source);

    if json {
        output::print_json(&output::JsonReport::from_result(&result)).into_diagnostic()?;
        if result.is_err() {
            process::exit(1);
        }
        return Ok(());
    }

    let code = result?;
    if highlight {
        output::print_highlighted(&code, &config.colors, color);
    } else {
        println!("{}", code);
    }
    Ok(())
}

/// Handles the `compile` subcommand.
fn handle_compile(transpiler: &Transpiler, path: &Path, output: Option<&Path>) -> Result<()> {
    let source = read_source(path)?;
    let artifact = output.unwrap_or(transpiler.skeleton().output.as_path());
    let body = transpiler.compile_to_path(&path.display().to_string(), &source, artifact)?;
    println!("{}", body);
    Ok(())
}

/// Handles the `check` subcommand: transpile and lint every rune file found.
fn handle_check(transpiler: &Transpiler, root: &Path, color: ColorChoice) -> Result<()> {
    let files = discover_rune_files(root)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to search '{}'", root.display()))?;
    if files.is_empty() {
        warn!(root = %root.display(), "no rune files found");
    }

    let mut stdout = StandardStream::stdout(color);
    let mut failed = 0;
    for file in &files {
        let name = file.display().to_string();
        let source = read_source(file)?;
        match transpiler.transpile_named(&name, &source) {
            Ok(code) => output::print_check_pass(&mut stdout, &name, &validation::lint(&code)),
            Err(err) => {
                failed += 1;
                output::print_check_fail(&mut stdout, &name, &err);
            }
        }
    }
    output::print_check_summary(&mut stdout, files.len() - failed, failed);

    if failed > 0 {
        return Err(miette::miette!(
            "{} of {} rune files failed to transpile",
            failed,
            files.len()
        ));
    }
    Ok(())
}
