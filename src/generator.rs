//! Turning a generator definition into a pipeline action list.

use crate::config::GeneratorConfig;
use crate::pipeline::Action;

/// Build the ordered actions for one generator run.
///
/// The order is fixed: fetch, template tree, input file, manifest entry,
/// closing message. The fetch is only included when the generator writes an
/// input file, since nothing else consumes `input`.
pub fn build_actions(generator: &GeneratorConfig, puzzle_base_url: &str) -> Vec<Action> {
    let mut actions = Vec::with_capacity(5);

    if generator.input_file.is_some() {
        actions.push(Action::Fetch);
    }

    actions.push(Action::BulkTemplateCopy {
        template_root: generator.template_dir.clone(),
        glob: generator.template_glob.clone(),
        destination: generator.destination.clone(),
    });

    if let Some(input_file) = &generator.input_file {
        actions.push(Action::SingleTemplateWrite {
            path: input_file.clone(),
            template: generator.input_template.clone(),
        });
    }

    if let Some(manifest) = &generator.manifest {
        actions.push(Action::Append {
            path: manifest.path.clone(),
            anchor: manifest.anchor.clone(),
            template: manifest.entry.clone(),
            deduplicate: manifest.deduplicate,
        });
    }

    actions.push(Action::Message {
        template: puzzle_link_template(puzzle_base_url),
    });

    actions
}

/// `Find Today's Puzzle at {base}/{{year}}/day/{{day_raw}}`
fn puzzle_link_template(puzzle_base_url: &str) -> String {
    format!(
        "Find Today's Puzzle at {}/{{{{year}}}}/day/{{{{day_raw}}}}",
        puzzle_base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManifestConfig;
    use crate::fetch::DEFAULT_BASE_URL;

    #[test]
    fn test_rust_generator_actions_in_order() {
        let actions = build_actions(&GeneratorConfig::rust(), DEFAULT_BASE_URL);

        let labels: Vec<_> = actions.iter().map(Action::label).collect();
        assert_eq!(labels, vec!["fetch", "add-many", "add", "append", "message"]);

        assert_eq!(
            actions[1],
            Action::BulkTemplateCopy {
                template_root: "templates/rust".to_string(),
                glob: "**/*.hbs".to_string(),
                destination: "rust/day_{{day}}".to_string(),
            }
        );
        assert_eq!(
            actions[2],
            Action::SingleTemplateWrite {
                path: "rust/day_{{day}}/input.txt".to_string(),
                template: "{{input}}".to_string(),
            }
        );
        assert_eq!(
            actions[3],
            Action::Append {
                path: "Cargo.toml".to_string(),
                anchor: "#plop-members-prefix".to_string(),
                template: "\t\"rust/day_{{day}}\",".to_string(),
                deduplicate: true,
            }
        );
        assert_eq!(
            actions[4],
            Action::Message {
                template: "Find Today's Puzzle at https://adventofcode.com/{{year}}/day/{{day_raw}}"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_generator_without_input_file_skips_fetch() {
        let generator = GeneratorConfig {
            input_file: None,
            manifest: None,
            ..GeneratorConfig::rust()
        };

        let labels: Vec<_> = build_actions(&generator, DEFAULT_BASE_URL)
            .iter()
            .map(Action::label)
            .collect();
        assert_eq!(labels, vec!["add-many", "message"]);
    }

    #[test]
    fn test_manifest_settings_are_carried_through() {
        let generator = GeneratorConfig {
            manifest: Some(ManifestConfig {
                path: "members.txt".to_string(),
                anchor: "# days".to_string(),
                entry: "day_{{day}}".to_string(),
                deduplicate: false,
            }),
            ..GeneratorConfig::rust()
        };

        let actions = build_actions(&generator, DEFAULT_BASE_URL);
        assert!(actions.contains(&Action::Append {
            path: "members.txt".to_string(),
            anchor: "# days".to_string(),
            template: "day_{{day}}".to_string(),
            deduplicate: false,
        }));
    }

    #[test]
    fn test_link_uses_configured_base_url() {
        assert_eq!(
            puzzle_link_template("http://localhost:3000/"),
            "Find Today's Puzzle at http://localhost:3000/{{year}}/day/{{day_raw}}"
        );
    }

    #[test]
    fn test_only_the_message_is_side_effect_free() {
        let actions = build_actions(&GeneratorConfig::rust(), DEFAULT_BASE_URL);
        let writers: Vec<_> = actions
            .iter()
            .filter(|a| a.writes_files())
            .map(Action::label)
            .collect();
        assert_eq!(writers, vec!["add-many", "add", "append"]);
    }
}
