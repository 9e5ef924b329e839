//! CLI argument parsing for aoc-scaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// aoc-scaffold: set up a day's puzzle crate and download its input.
///
/// Renders the generator's templates into a per-day directory, writes the
/// puzzle input next to them, and registers the directory in the workspace
/// manifest.
#[derive(Parser, Debug)]
#[command(name = "aoc-scaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project root (defaults to the current directory).
    #[arg(short = 'C', long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Log filter, e.g. `info` or `aoc_scaffold=debug`. `RUST_LOG` wins when set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a day with the named generator.
    ///
    /// Downloads the puzzle input, renders the generator's templates,
    /// writes the input file and appends the manifest entry.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// List configured generators.
    List,

    /// Create starter templates, a `.env.example` and the workspace manifest.
    ///
    /// Existing files are left alone.
    Init,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Generator key (e.g. `rust`).
    #[arg(default_value = "rust")]
    pub generator: String,

    /// Day of the puzzle. Prompted for on stdin when omitted.
    #[arg(short, long)]
    pub day: Option<String>,

    /// Overwrite files that already exist.
    #[arg(long)]
    pub force: bool,

    /// Append the manifest entry even if it is already present.
    #[arg(long)]
    pub allow_duplicate_entry: bool,

    /// Env file with `year` and `session` (defaults to the config's `env_file`).
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
