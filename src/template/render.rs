//! Placeholder substitution.
//!
//! A placeholder is `{{` + optional whitespace + identifier + optional
//! whitespace + `}}`. Anything else, including single braces and `{{}}`, is
//! copied through unchanged.

use crate::context::Context;
use regex::{Captures, Regex};
use std::path::PathBuf;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid placeholder regex")
});

/// Render a template by substituting context values.
///
/// Every placeholder bound to a context key is replaced by that key's text
/// form. Unbound placeholders stay in the output verbatim; templates are
/// author-controlled, so a typo shows up in the generated file rather than
/// aborting the run.
pub fn render(template: &str, ctx: &Context) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            ctx.get_text(&caps[1])
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Render a path pattern such as `rust/day_{{day}}`.
pub fn render_path(pattern: &str, ctx: &Context) -> PathBuf {
    PathBuf::from(render(pattern, ctx))
}

/// Names of all placeholders in a template, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholders that the given context cannot resolve.
pub fn unresolved(template: &str, ctx: &Context) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|name| ctx.get_text(name).is_none())
        .collect()
}
