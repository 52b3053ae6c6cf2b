//! Defines the command-line arguments and subcommands for the Runic CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "runic",
    version,
    about = "Transpiles runic glyph source into C++."
)]
pub struct RunicArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a YAML config file. Defaults to ./runic.yaml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transpile a rune file and print the C++ body.
    Transpile {
        /// The path to the rune source file.
        #[arg(required = true)]
        file: PathBuf,
        /// Print a JSON object instead of plain text.
        #[arg(long, conflicts_with = "highlight")]
        json: bool,
        /// Colour keywords, strings and comments in the output.
        #[arg(long)]
        highlight: bool,
    },
    /// Transpile a rune file and write it wrapped in a runnable program.
    Compile {
        /// The path to the rune source file.
        #[arg(required = true)]
        file: PathBuf,
        /// Artifact path. Overrides the configured output.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Transpile and lint every rune file under a path.
    Check {
        /// A rune file or a directory to search.
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// List the glyph alphabet.
    Runes,
    /// Complete a keyword prefix.
    Suggest {
        /// The prefix to complete.
        prefix: String,
    },
    /// Start an interactive transpile session.
    Repl,
}
