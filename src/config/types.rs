//! Generator definitions and serde defaults.

use serde::{Deserialize, Serialize};

/// Key of the generator that is always available.
pub const RUST_GENERATOR: &str = "rust";

/// One named scaffolding generator.
///
/// Every string field except `description` may contain `{{placeholders}}`
/// that are rendered against the run's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Shown by `aoc-scaffold list`.
    #[serde(default)]
    pub description: String,

    /// Template root, relative to the project root.
    pub template_dir: String,

    /// Glob selecting template files, relative to `template_dir`.
    #[serde(default = "default_template_glob")]
    pub template_glob: String,

    /// Destination directory pattern, relative to the project root.
    pub destination: String,

    /// Where the downloaded input is written. `None` skips the input file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,

    /// Body of the input file.
    #[serde(default = "default_input_template")]
    pub input_template: String,

    /// Manifest registration. `None` skips the append.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ManifestConfig>,
}

impl GeneratorConfig {
    /// The built-in Rust generator: one workspace member crate per day.
    pub fn rust() -> Self {
        Self {
            description: "Create a new day's Puzzle for Rust".to_string(),
            template_dir: "templates/rust".to_string(),
            template_glob: default_template_glob(),
            destination: "rust/day_{{day}}".to_string(),
            input_file: Some("rust/day_{{day}}/input.txt".to_string()),
            input_template: default_input_template(),
            manifest: Some(ManifestConfig::default()),
        }
    }
}

/// Where and how a new day is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Manifest file, relative to the project root.
    pub path: String,

    /// Line after which the entry is inserted.
    pub anchor: String,

    /// Entry template.
    pub entry: String,

    /// Skip the append when the entry is already present.
    pub deduplicate: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: "Cargo.toml".to_string(),
            anchor: "#plop-members-prefix".to_string(),
            entry: "\t\"rust/day_{{day}}\",".to_string(),
            deduplicate: default_true(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_template_glob() -> String {
    "**/*.hbs".to_string()
}
pub(crate) fn default_input_template() -> String {
    "{{input}}".to_string()
}
pub(crate) fn default_env_file() -> String {
    ".env".to_string()
}
pub(crate) fn default_puzzle_base_url() -> String {
    crate::fetch::DEFAULT_BASE_URL.to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
