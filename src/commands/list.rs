//! Implementation of the `aoc-scaffold list` command.

use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Print every configured generator with its description and destination.
pub fn cmd_list(root: &Path) -> Result<()> {
    let config = Config::load_for_project(root)?;

    println!("Generators ({}):", config.generators.len());
    for (name, generator) in &config.generators {
        if generator.description.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {:<12} {}", name, generator.description);
        }
        println!("  {:<12} -> {}", "", generator.destination);
    }

    Ok(())
}
