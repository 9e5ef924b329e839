//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project configuration, read from `scaffold.yaml` at the project root.
///
/// The file is optional; every field has a default. Unknown fields are
/// ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site the puzzle input and puzzle page links are taken from.
    #[serde(default = "default_puzzle_base_url")]
    pub puzzle_base_url: String,

    /// Key/value file holding `year` and `session`, relative to the project root.
    #[serde(default = "default_env_file")]
    pub env_file: String,

    /// Generators by name. The built-in `rust` generator is added when missing.
    pub generators: BTreeMap<String, GeneratorConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let mut generators = BTreeMap::new();
        generators.insert(RUST_GENERATOR.to_string(), GeneratorConfig::rust());

        Self {
            puzzle_base_url: default_puzzle_base_url(),
            env_file: default_env_file(),
            generators,
        }
    }
}
