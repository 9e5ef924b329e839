//! Starter files for the init command.

use crate::error::{Result, ScaffoldError};
use crate::fs::{atomic_write_file, create_file};
use std::fs;
use std::path::Path;

pub(super) const ENV_EXAMPLE_FILE: &str = ".env.example";
pub(super) const ENV_EXAMPLE: &str = include_str!("../../../assets/env.example");

/// Starter templates, as (path relative to the template dir, content).
const RUST_TEMPLATES: &[(&str, &str)] = &[
    (
        "Cargo.toml.hbs",
        include_str!("../../../assets/templates/rust/Cargo.toml.hbs"),
    ),
    (
        "src/main.rs.hbs",
        include_str!("../../../assets/templates/rust/src/main.rs.hbs"),
    ),
];

/// Entries `.gitignore` must contain.
const GITIGNORE_ENTRIES: &[&str] = &[".env", "target/"];

/// Paths (relative to the project root) touched by init.
#[derive(Debug, Default)]
pub(super) struct ScaffoldSummary {
    pub created: Vec<String>,
    pub kept: Vec<String>,
    pub manifest_hint: Option<String>,
}

/// Write `content` to `root/relative` unless the file already exists.
pub(super) fn write_starter(
    root: &Path,
    relative: &str,
    content: &str,
    summary: &mut ScaffoldSummary,
) -> Result<()> {
    match create_file(&root.join(relative), content, false) {
        Ok(_) => summary.created.push(relative.to_string()),
        Err(ScaffoldError::FileExists(_)) => summary.kept.push(relative.to_string()),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Write the starter Rust templates under `template_dir`.
pub(super) fn write_templates(
    root: &Path,
    template_dir: &str,
    summary: &mut ScaffoldSummary,
) -> Result<()> {
    let template_dir = template_dir.trim_end_matches('/');
    for (relative, content) in RUST_TEMPLATES {
        write_starter(root, &format!("{}/{}", template_dir, relative), content, summary)?;
    }
    Ok(())
}

/// Create a workspace manifest holding `anchor`, or check an existing one.
///
/// An existing manifest is never edited; if it lacks the anchor line a hint
/// is recorded instead.
pub(super) fn ensure_workspace_manifest(
    root: &Path,
    manifest: &str,
    anchor: &str,
    summary: &mut ScaffoldSummary,
) -> Result<()> {
    let path = root.join(manifest);
    if !path.exists() {
        let content = format!(
            "[workspace]\nresolver = \"2\"\nmembers = [\n    {}\n]\n",
            anchor.trim()
        );
        return write_starter(root, manifest, &content, summary);
    }

    let existing = fs::read_to_string(&path).map_err(|e| {
        ScaffoldError::Io(format!("failed to read '{}': {}", path.display(), e))
    })?;
    summary.kept.push(manifest.to_string());

    if !existing.lines().any(|line| line.trim() == anchor.trim()) {
        summary.manifest_hint = Some(format!(
            "hint: '{}' has no '{}' line. Add it inside `members = [...]` so new days can be registered.",
            manifest,
            anchor.trim()
        ));
    }
    Ok(())
}

/// Add `.env` and `target/` to `.gitignore`, creating it if needed.
pub(super) fn ensure_gitignore(root: &Path, summary: &mut ScaffoldSummary) -> Result<()> {
    let path = root.join(".gitignore");
    let existed = path.exists();
    let existing = if existed {
        fs::read_to_string(&path).map_err(|e| {
            ScaffoldError::Io(format!("failed to read '{}': {}", path.display(), e))
        })?
    } else {
        String::new()
    };

    let missing: Vec<&str> = GITIGNORE_ENTRIES
        .iter()
        .copied()
        .filter(|entry| !existing.lines().any(|line| line.trim() == *entry))
        .collect();

    if missing.is_empty() {
        summary.kept.push(".gitignore".to_string());
        return Ok(());
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for entry in missing {
        content.push_str(entry);
        content.push('\n');
    }
    atomic_write_file(&path, &content)?;

    if existed {
        summary.kept.push(".gitignore (entries added)".to_string());
    } else {
        summary.created.push(".gitignore".to_string());
    }
    Ok(())
}
