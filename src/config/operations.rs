//! Config loading, validation, and lookup.

use super::CONFIG_FILE;
use super::model::Config;
use super::types::{GeneratorConfig, RUST_GENERATOR};
use crate::error::{Result, ScaffoldError};
use globset::Glob;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `scaffold.yaml` from the project root, falling back to defaults
    /// when the file does not exist.
    pub fn load_for_project(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are ignored. The built-in `rust` generator is added
    /// when the file does not define one of that name.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ScaffoldError::Config(format!("failed to parse config YAML: {}", e))
            })?
        };

        config
            .generators
            .entry(RUST_GENERATOR.to_string())
            .or_insert_with(GeneratorConfig::rust);

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ScaffoldError::Config(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Rules:
    /// - `puzzle_base_url` must be an http(s) URL
    /// - generator names must be non-empty and contain no whitespace
    /// - `template_dir` and `destination` must be non-empty
    /// - `template_glob` must be a valid glob
    /// - manifest `path` and `anchor` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if !(self.puzzle_base_url.starts_with("http://")
            || self.puzzle_base_url.starts_with("https://"))
        {
            return Err(invalid(format!(
                "puzzle_base_url must start with http:// or https:// (found '{}')",
                self.puzzle_base_url
            )));
        }

        for (name, generator) in &self.generators {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(invalid(format!(
                    "generator names must be non-empty and contain no whitespace (found '{}')",
                    name
                )));
            }
            if generator.template_dir.trim().is_empty() {
                return Err(invalid(format!(
                    "generator '{}': template_dir must not be empty",
                    name
                )));
            }
            if generator.destination.trim().is_empty() {
                return Err(invalid(format!(
                    "generator '{}': destination must not be empty",
                    name
                )));
            }
            if let Err(e) = Glob::new(&generator.template_glob) {
                return Err(invalid(format!(
                    "generator '{}': invalid template_glob '{}': {}",
                    name, generator.template_glob, e
                )));
            }
            if let Some(manifest) = &generator.manifest {
                if manifest.path.trim().is_empty() {
                    return Err(invalid(format!(
                        "generator '{}': manifest.path must not be empty",
                        name
                    )));
                }
                if manifest.anchor.trim().is_empty() {
                    return Err(invalid(format!(
                        "generator '{}': manifest.anchor must not be empty",
                        name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up a generator by name.
    pub fn generator(&self, name: &str) -> Result<&GeneratorConfig> {
        self.generators.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.generators.keys().map(String::as_str).collect();
            ScaffoldError::Config(format!(
                "unknown generator '{}' (available: {})",
                name,
                known.join(", ")
            ))
        })
    }
}

fn invalid(message: String) -> ScaffoldError {
    ScaffoldError::Config(format!("config validation failed: {}", message))
}
