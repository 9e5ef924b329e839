//! Template rendering and template-tree discovery.
//!
//! This module provides:
//!
//! - **Render**: `{{ name }}` placeholder substitution from a [`Context`]
//! - **Collect**: discovery of template files under a template root
//!
//! # Template Syntax
//!
//! ```text
//! fn main() {
//!     let input = std::fs::read_to_string("rust/day_{{day}}/input.txt");
//! }
//! ```
//!
//! Single braces are plain text, so Rust code can be templated as-is.
//! Placeholders with no matching context key are left untouched.
//!
//! [`Context`]: crate::context::Context

mod collect;
mod render;

pub use collect::{TemplateFile, collect_templates};
pub use render::{placeholders, render, render_path, unresolved};
