//! Configuration for aoc-scaffold.
//!
//! Two files feed a run:
//!
//! - `scaffold.yaml`: optional project config (generators, puzzle site)
//! - `.env`: `year` and `session`, merged verbatim into the run context

mod env;
mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use env::load_env;
pub use model::Config;
pub use types::{GeneratorConfig, ManifestConfig, RUST_GENERATOR};

/// Config file name, relative to the project root.
pub const CONFIG_FILE: &str = "scaffold.yaml";
