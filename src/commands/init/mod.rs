//! Implementation of the `aoc-scaffold init` command.
//!
//! # What `aoc-scaffold init` does
//!
//! 1. Writes `scaffold.yaml` with the built-in `rust` generator (if missing)
//! 2. Writes the starter Rust templates into `templates/rust/` (if missing)
//! 3. Writes `.env.example` with the `year` and `session` keys
//! 4. Creates a workspace `Cargo.toml` holding the manifest anchor, or checks
//!    that an existing one has it
//! 5. Makes sure `.gitignore` keeps `.env` and `target/` out of git
//!
//! Running it twice changes nothing the second time.

mod scaffolding;

#[cfg(test)]
mod tests;

use crate::config::{CONFIG_FILE, Config, RUST_GENERATOR};
use crate::error::Result;
use std::path::Path;

use scaffolding::*;

/// Execute the `aoc-scaffold init` command.
pub fn cmd_init(root: &Path) -> Result<()> {
    let summary = scaffold_project(root)?;

    println!("Initialized aoc-scaffold in {}", root.display());
    println!();
    if !summary.created.is_empty() {
        println!("Created:");
        for path in &summary.created {
            println!("  {}", path);
        }
    }
    if !summary.kept.is_empty() {
        println!("Already present (left alone):");
        for path in &summary.kept {
            println!("  {}", path);
        }
    }
    if let Some(hint) = &summary.manifest_hint {
        println!();
        println!("{}", hint);
    }
    println!();
    println!("Copy .env.example to .env, fill in your session cookie, then run");
    println!("`aoc-scaffold generate --day 1`.");

    Ok(())
}

/// Write every starter file under `root` and report what happened.
pub(super) fn scaffold_project(root: &Path) -> Result<ScaffoldSummary> {
    let mut summary = ScaffoldSummary::default();

    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };
    write_starter(root, CONFIG_FILE, &config.to_yaml()?, &mut summary)?;

    let generator = config.generator(RUST_GENERATOR)?;
    write_templates(root, &generator.template_dir, &mut summary)?;
    write_starter(root, ENV_EXAMPLE_FILE, ENV_EXAMPLE, &mut summary)?;

    if let Some(manifest) = &generator.manifest {
        ensure_workspace_manifest(root, &manifest.path, &manifest.anchor, &mut summary)?;
    }
    ensure_gitignore(root, &mut summary)?;

    Ok(summary)
}
