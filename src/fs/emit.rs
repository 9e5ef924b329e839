//! Writing rendered content to disk.
//!
//! Two modes:
//!
//! - [`create_file`]: write a new file, refusing to clobber an existing one
//!   unless overwriting was requested
//! - [`append_after_anchor`]: insert text right after an anchor line inside
//!   an existing file, leaving every other byte alone

use super::atomic_write_file;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What [`create_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
}

/// What [`append_after_anchor`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Text was inserted; `line` is the 1-based line number of the anchor.
    Inserted { line: usize },
    /// Deduplication found the text already present at `line` (1-based).
    AlreadyPresent { line: usize },
}

/// Write `content` to `path`.
///
/// # Errors
///
/// * `ScaffoldError::FileExists` - `path` exists and `overwrite` is false
/// * `ScaffoldError::Io` - the write failed
pub fn create_file(path: &Path, content: &str, overwrite: bool) -> Result<WriteOutcome> {
    let existed = path.exists();
    if existed && !overwrite {
        return Err(ScaffoldError::FileExists(path.to_path_buf()));
    }

    atomic_write_file(path, content)?;

    Ok(if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    })
}

/// Insert `text` as new line(s) immediately after the first line equal to
/// `anchor`.
///
/// Lines are compared with surrounding whitespace ignored, so an indented
/// anchor inside a TOML array still matches. The inserted text takes the
/// anchor line's line ending. With `deduplicate`, the file is left untouched
/// when every non-blank line of `text` already appears in it.
///
/// # Errors
///
/// * `ScaffoldError::TargetMissing` - `path` does not exist
/// * `ScaffoldError::AnchorNotFound` - no line matches `anchor`
/// * `ScaffoldError::Io` - reading or writing failed
pub fn append_after_anchor(
    path: &Path,
    anchor: &str,
    text: &str,
    deduplicate: bool,
) -> Result<AppendOutcome> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScaffoldError::TargetMissing(path.to_path_buf()),
        _ => ScaffoldError::Io(format!("failed to read '{}': {}", path.display(), e)),
    })?;

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let anchor = anchor.trim();

    let anchor_idx = lines
        .iter()
        .position(|line| line.trim() == anchor)
        .ok_or_else(|| ScaffoldError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: anchor.to_string(),
        })?;

    if deduplicate && let Some(line) = find_existing(&lines, text) {
        return Ok(AppendOutcome::AlreadyPresent { line });
    }

    let anchor_line = lines[anchor_idx];
    let ending = if anchor_line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    let text = text
        .trim_end_matches(['\r', '\n'])
        .lines()
        .collect::<Vec<_>>()
        .join(ending);

    let mut updated = String::with_capacity(content.len() + text.len() + ending.len() * 2);
    for line in &lines[..=anchor_idx] {
        updated.push_str(line);
    }
    if anchor_line.ends_with('\n') {
        updated.push_str(&text);
        updated.push_str(ending);
    } else {
        // Anchor was the final line with no trailing newline.
        updated.push_str(ending);
        updated.push_str(&text);
    }
    for line in &lines[anchor_idx + 1..] {
        updated.push_str(line);
    }

    atomic_write_file(path, &updated)?;

    Ok(AppendOutcome::Inserted {
        line: anchor_idx + 1,
    })
}

/// 1-based line number of the first line of `text` if all of its non-blank
/// lines are already present.
fn find_existing(lines: &[&str], text: &str) -> Option<usize> {
    let wanted: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let first = *wanted.first()?;

    let all_present = wanted
        .iter()
        .all(|w| lines.iter().any(|line| line.trim() == *w));
    if !all_present {
        return None;
    }

    lines
        .iter()
        .position(|line| line.trim() == first)
        .map(|idx| idx + 1)
}
