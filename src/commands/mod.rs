//! Command implementations for aoc-scaffold.
//!
//! This module routes parsed CLI commands to their handlers and holds the
//! small helpers they share.

mod generate;
mod init;
mod list;

use crate::cli::{Cli, Command, GlobalArgs};
use crate::error::{Result, ScaffoldError};
use std::env;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let root = resolve_project_root(&cli.global)?;

    match cli.command {
        Command::Generate(args) => generate::cmd_generate(&root, args).await,
        Command::List => list::cmd_list(&root),
        Command::Init => init::cmd_init(&root),
    }
}

/// The project root: `--project-root` if given, else the current directory.
fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf> {
    match &global.project_root {
        Some(root) if !root.is_dir() => Err(ScaffoldError::Config(format!(
            "project root '{}' is not a directory",
            root.display()
        ))),
        Some(root) => Ok(root.clone()),
        None => env::current_dir().map_err(|e| {
            ScaffoldError::Io(format!("failed to get current working directory: {}", e))
        }),
    }
}
