//! Tests for config and env loading.

use crate::config::{CONFIG_FILE, Config, GeneratorConfig, ManifestConfig, RUST_GENERATOR, load_env};
use crate::error::ScaffoldError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.puzzle_base_url, "https://adventofcode.com");
    assert_eq!(config.env_file, ".env");
    assert_eq!(config.generators.len(), 1);

    let rust = config.generator(RUST_GENERATOR).unwrap();
    assert_eq!(rust.template_dir, "templates/rust");
    assert_eq!(rust.template_glob, "**/*.hbs");
    assert_eq!(rust.destination, "rust/day_{{day}}");
    assert_eq!(rust.input_file.as_deref(), Some("rust/day_{{day}}/input.txt"));
    assert_eq!(rust.input_template, "{{input}}");

    let manifest = rust.manifest.as_ref().unwrap();
    assert_eq!(manifest.path, "Cargo.toml");
    assert_eq!(manifest.anchor, "#plop-members-prefix");
    assert_eq!(manifest.entry, "\t\"rust/day_{{day}}\",");
    assert!(manifest.deduplicate);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
puzzle_base_url: http://localhost:8080
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.puzzle_base_url, "http://localhost:8080");
    assert_eq!(config.env_file, ".env");
    assert!(config.generators.contains_key(RUST_GENERATOR));
}

#[test]
fn test_parse_custom_generator_keeps_builtin_rust() {
    let yaml = r#"
generators:
  python:
    description: Python solution skeleton
    template_dir: templates/python
    destination: python/day_{{day}}
    input_file: python/day_{{day}}/input.txt
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.generators.len(), 2);
    let python = config.generator("python").unwrap();
    assert_eq!(python.template_glob, "**/*.hbs");
    assert_eq!(python.input_template, "{{input}}");
    assert!(python.manifest.is_none());
    assert_eq!(config.generator("rust").unwrap(), &GeneratorConfig::rust());
}

#[test]
fn test_rust_generator_can_be_overridden() {
    let yaml = r##"
generators:
  rust:
    template_dir: tpl
    destination: days/{{day}}
    manifest:
      anchor: "# members"
      deduplicate: false
"##;
    let config = Config::from_yaml(yaml).unwrap();
    let rust = config.generator("rust").unwrap();

    assert_eq!(rust.template_dir, "tpl");
    assert_eq!(rust.input_file, None);

    let manifest = rust.manifest.as_ref().unwrap();
    assert_eq!(manifest.anchor, "# members");
    assert_eq!(manifest.path, ManifestConfig::default().path);
    assert!(!manifest.deduplicate);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
some_future_setting: 3
env_file: secrets.env
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.env_file, "secrets.env");
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let err = Config::from_yaml("generators: [unclosed").unwrap_err();
    assert!(matches!(err, ScaffoldError::Config(_)));
}

#[test]
fn test_validation_rejects_bad_base_url() {
    let err = Config::from_yaml("puzzle_base_url: ftp://example.com").unwrap_err();
    assert!(err.to_string().contains("puzzle_base_url"));
}

#[test]
fn test_validation_rejects_bad_glob() {
    let yaml = r#"
generators:
  broken:
    template_dir: t
    destination: d
    template_glob: "a["
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("template_glob"));
}

#[test]
fn test_validation_rejects_empty_anchor() {
    let yaml = r#"
generators:
  rust:
    template_dir: t
    destination: d
    manifest:
      anchor: "  "
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("manifest.anchor"));
}

#[test]
fn test_unknown_generator_lists_available() {
    let config = Config::default();
    let err = config.generator("cobol").unwrap_err();

    assert!(matches!(err, ScaffoldError::Config(_)));
    assert_eq!(
        err.to_string(),
        "unknown generator 'cobol' (available: rust)"
    );
}

#[test]
fn test_yaml_roundtrip_of_defaults() {
    let config = Config::default();
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_for_project_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_for_project(temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_for_project_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE),
        "puzzle_base_url: http://127.0.0.1:9999\n",
    )
    .unwrap();

    let config = Config::load_for_project(temp_dir.path()).unwrap();
    assert_eq!(config.puzzle_base_url, "http://127.0.0.1:9999");
}

#[test]
fn test_load_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "# puzzle settings\nyear=2023\nsession=\"53616c7465645f5f\"\n").unwrap();

    let env = load_env(&path).unwrap();

    assert_eq!(env.get("year").map(String::as_str), Some("2023"));
    assert_eq!(env.get("session").map(String::as_str), Some("53616c7465645f5f"));
    assert_eq!(env.len(), 2);
}

#[test]
fn test_load_env_does_not_touch_process_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "AOC_SCAFFOLD_TEST_ONLY_KEY=1\n").unwrap();

    load_env(&path).unwrap();

    assert!(std::env::var("AOC_SCAFFOLD_TEST_ONLY_KEY").is_err());
}

#[test]
fn test_missing_env_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let env = load_env(&temp_dir.path().join(".env")).unwrap();
    assert!(env.is_empty());
}
