//! Tests for the init command.

use super::*;
use crate::context::Context;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_creates_starter_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let summary = scaffold_project(root).unwrap();

    assert!(root.join("scaffold.yaml").is_file());
    assert!(root.join("templates/rust/Cargo.toml.hbs").is_file());
    assert!(root.join("templates/rust/src/main.rs.hbs").is_file());
    assert!(root.join(".env.example").is_file());
    assert!(summary.kept.is_empty());
    assert!(summary.manifest_hint.is_none());

    let manifest = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert_eq!(
        manifest,
        "[workspace]\nresolver = \"2\"\nmembers = [\n    #plop-members-prefix\n]\n"
    );

    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    assert_eq!(gitignore, ".env\ntarget/\n");
}

#[test]
fn test_init_writes_a_loadable_config() {
    let temp_dir = TempDir::new().unwrap();
    scaffold_project(temp_dir.path()).unwrap();

    let config = Config::load_for_project(temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_init_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    scaffold_project(root).unwrap();
    fs::write(root.join("templates/rust/src/main.rs.hbs"), "custom\n").unwrap();

    let summary = scaffold_project(root).unwrap();

    assert!(summary.created.is_empty());
    assert!(summary.kept.contains(&"Cargo.toml".to_string()));
    assert!(summary.kept.contains(&".gitignore".to_string()));
    assert_eq!(
        fs::read_to_string(root.join("templates/rust/src/main.rs.hbs")).unwrap(),
        "custom\n"
    );
}

#[test]
fn test_init_leaves_existing_manifest_alone_and_hints() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let original = "[workspace]\nmembers = [\"rust/day_01\"]\n";
    fs::write(root.join("Cargo.toml"), original).unwrap();

    let summary = scaffold_project(root).unwrap();

    assert_eq!(fs::read_to_string(root.join("Cargo.toml")).unwrap(), original);
    let hint = summary.manifest_hint.unwrap();
    assert!(hint.contains("#plop-members-prefix"));
}

#[test]
fn test_init_accepts_indented_anchor_in_existing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("Cargo.toml"),
        "[workspace]\nmembers = [\n\t#plop-members-prefix\n]\n",
    )
    .unwrap();

    let summary = scaffold_project(root).unwrap();

    assert!(summary.manifest_hint.is_none());
}

#[test]
fn test_init_appends_missing_gitignore_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".gitignore"), "target/").unwrap();

    scaffold_project(root).unwrap();

    assert_eq!(
        fs::read_to_string(root.join(".gitignore")).unwrap(),
        "target/\n.env\n"
    );
}

#[test]
fn test_init_respects_custom_template_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("scaffold.yaml"),
        "generators:\n  rust:\n    template_dir: tpl/rs/\n    destination: \"rs/{{day}}\"\n",
    )
    .unwrap();

    scaffold_project(root).unwrap();

    assert!(root.join("tpl/rs/Cargo.toml.hbs").is_file());
    assert!(root.join("tpl/rs/src/main.rs.hbs").is_file());
    assert!(!root.join("templates").exists());
}

#[test]
fn test_starter_templates_render_for_a_day() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    scaffold_project(root).unwrap();

    let mut env = BTreeMap::new();
    env.insert("year".to_string(), "2024".to_string());
    let ctx = Context::build("9", &env).unwrap();

    let cargo = fs::read_to_string(root.join("templates/rust/Cargo.toml.hbs")).unwrap();
    let rendered = crate::template::render(&cargo, &ctx);
    assert!(rendered.contains("name = \"day_09\""));
    assert!(crate::template::unresolved(&rendered, &ctx).is_empty());
}
