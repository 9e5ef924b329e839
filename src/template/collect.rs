//! Template tree discovery for bulk copies.

use crate::error::{Result, ScaffoldError};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension marking a file as a template. Stripped from output names.
const TEMPLATE_EXTENSION: &str = "hbs";

/// A template file found under a template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Absolute (or root-joined) path of the template on disk.
    pub source: PathBuf,
    /// Output path relative to the destination directory, with the
    /// template extension removed. May still contain placeholders.
    pub relative: PathBuf,
}

impl TemplateFile {
    /// Read the template body.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.source).map_err(|e| {
            ScaffoldError::Io(format!(
                "failed to read template '{}': {}",
                self.source.display(),
                e
            ))
        })
    }
}

/// Collect every file under `root` whose root-relative path matches `glob`.
///
/// Results are sorted by relative path so generation order is stable.
///
/// # Errors
///
/// * `ScaffoldError::Config` - `root` is not a directory or `glob` is invalid
/// * `ScaffoldError::Io` - the tree could not be walked
pub fn collect_templates(root: &Path, glob: &str) -> Result<Vec<TemplateFile>> {
    if !root.is_dir() {
        return Err(ScaffoldError::Config(format!(
            "template directory '{}' does not exist\n\
             Run `aoc-scaffold init` to create a starter template set.",
            root.display()
        )));
    }

    let matcher = compile_glob(glob)?;
    let mut templates = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            ScaffoldError::Io(format!(
                "failed to walk template directory '{}': {}",
                root.display(),
                e
            ))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        if !matcher.is_match(relative) {
            continue;
        }

        templates.push(TemplateFile {
            source: entry.path().to_path_buf(),
            relative: output_name(relative),
        });
    }

    templates.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(templates)
}

fn compile_glob(glob: &str) -> Result<GlobMatcher> {
    Glob::new(glob)
        .map(|g| g.compile_matcher())
        .map_err(|e| {
            ScaffoldError::Config(format!("invalid template glob '{}': {}", glob, e))
        })
}

/// Drop a trailing `.hbs` so `src/main.rs.hbs` becomes `src/main.rs`.
fn output_name(relative: &Path) -> PathBuf {
    match relative.extension() {
        Some(ext) if ext == TEMPLATE_EXTENSION => relative.with_extension(""),
        _ => relative.to_path_buf(),
    }
}
