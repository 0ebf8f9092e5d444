use std::fs;
use std::path::Path;

use tempfile::tempdir;

use template_scaffold::case::ModifierRegistry;
use template_scaffold::discovery::discover_variables;
use template_scaffold::expansion::{UserVariables, expand_variables};
use template_scaffold::render::{RenderFailure, render};

// Helper function to build a template tree from (relative path, content) pairs
fn write_template(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn variables(pairs: &[(&str, &str)]) -> UserVariables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_render_greeting_with_modifier() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(template.path(), &[("hello.txt", "Hello {{ name.pascalCase }}!")]);

    let expanded = expand_variables(
        &variables(&[("name", "ada lovelace")]),
        &ModifierRegistry::standard(),
    );
    let outcome = render(template.path(), destination.path(), &expanded, false).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.files_written(), 1);
    assert_eq!(
        fs::read_to_string(destination.path().join("hello.txt")).unwrap(),
        "Hello AdaLovelace!"
    );
}

#[test]
fn test_render_paths_and_contents() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(
        template.path(),
        &[
            ("{{name.kebabCase}}/index.ts", "export * from './{{name.kebabCase}}';\n"),
            (
                "{{name.kebabCase}}/{{name.kebabCase}}.ts",
                "export class {{name.pascalCase}} {\n  static readonly ID = '{{name.screamingSnakeCase}}';\n}\n",
            ),
            ("{{name.kebabCase}}/styles/{{name.snakeCase}}.css", ".{{name.kebabCase}} {}\n"),
        ],
    );

    let expanded = expand_variables(
        &variables(&[("name", "user profile")]),
        &ModifierRegistry::standard(),
    );
    let outcome = render(template.path(), destination.path(), &expanded, false).unwrap();
    assert!(outcome.is_complete());
    assert_eq!(outcome.files_written(), 3);

    let root = destination.path().join("user-profile");
    assert_eq!(
        fs::read_to_string(root.join("index.ts")).unwrap(),
        "export * from './user-profile';\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("user-profile.ts")).unwrap(),
        "export class UserProfile {\n  static readonly ID = 'USER_PROFILE';\n}\n"
    );
    assert!(root.join("styles/user_profile.css").is_file());
}

#[test]
fn test_render_plain_variable_keeps_value() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(template.path(), &[("{{name}}.txt", "{{name}}")]);

    let expanded = expand_variables(&variables(&[("name", "x")]), &ModifierRegistry::standard());
    render(template.path(), destination.path(), &expanded, false).unwrap();

    assert_eq!(fs::read_to_string(destination.path().join("x.txt")).unwrap(), "x");
}

#[test]
fn test_unknown_modifier_renders_empty() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(template.path(), &[("out.txt", "[{{name.bogus}}][{{other}}]")]);

    let expanded = expand_variables(&variables(&[("name", "x")]), &ModifierRegistry::standard());
    render(template.path(), destination.path(), &expanded, false).unwrap();

    assert_eq!(
        fs::read_to_string(destination.path().join("out.txt")).unwrap(),
        "[][]"
    );
}

#[test]
fn test_collision_leaves_destination_untouched() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(
        template.path(),
        &[("a.txt", "new a"), ("{{name}}/b.txt", "new b")],
    );
    fs::write(destination.path().join("a.txt"), "old a").unwrap();

    let expanded = expand_variables(&variables(&[("name", "pkg")]), &ModifierRegistry::standard());
    let outcome = render(template.path(), destination.path(), &expanded, false).unwrap();

    assert!(!outcome.is_success());
    assert_eq!(outcome.files_written(), 0);
    assert!(matches!(
        outcome.failure(),
        Some(RenderFailure::Collision { path }) if path.ends_with("a.txt")
    ));
    assert_eq!(
        fs::read_to_string(destination.path().join("a.txt")).unwrap(),
        "old a"
    );
    assert!(!destination.path().join("pkg").exists());
}

#[test]
fn test_overwrite_replaces_existing_files() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(template.path(), &[("a.txt", "new a"), ("b.txt", "new b")]);
    fs::write(destination.path().join("a.txt"), "old a").unwrap();

    let expanded = expand_variables(&UserVariables::new(), &ModifierRegistry::standard());
    let outcome = render(template.path(), destination.path(), &expanded, true).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.files_written(), 2);
    assert_eq!(
        fs::read_to_string(destination.path().join("a.txt")).unwrap(),
        "new a"
    );
}

#[test]
fn test_write_conflict_keeps_earlier_files() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    // Both names render to "ada.txt"; "{{name.lowerCase}}.txt" sorts first.
    write_template(
        template.path(),
        &[("{{name.lowerCase}}.txt", "first"), ("{{name}}.txt", "second")],
    );

    let expanded = expand_variables(&variables(&[("name", "ada")]), &ModifierRegistry::standard());
    let outcome = render(template.path(), destination.path(), &expanded, false).unwrap();

    assert!(outcome.is_success());
    assert!(!outcome.is_complete());
    assert_eq!(outcome.files_written(), 1);
    assert!(matches!(
        outcome.failure(),
        Some(RenderFailure::WriteConflict { path }) if path.ends_with("ada.txt")
    ));
    assert_eq!(
        fs::read_to_string(destination.path().join("ada.txt")).unwrap(),
        "first"
    );
}

#[test]
fn test_rendered_path_cannot_leave_destination() {
    let template = tempdir().unwrap();
    let destination = tempdir().unwrap();
    write_template(template.path(), &[("{{name}}/evil.txt", "x")]);

    let expanded = expand_variables(&variables(&[("name", "..")]), &ModifierRegistry::standard());
    assert!(render(template.path(), destination.path(), &expanded, false).is_err());
    assert_eq!(fs::read_dir(destination.path()).unwrap().count(), 0);
}

#[test]
fn test_discovery_is_stable_and_ignores_modifiers() {
    let template = tempdir().unwrap();
    write_template(
        template.path(),
        &[
            ("{{name.kebabCase}}/{{name}}.ts", "{{ module.snakeCase }} {{name.pascalCase}}"),
            ("README.md", "no placeholders"),
        ],
    );

    let first = discover_variables(template.path()).unwrap();
    let second = discover_variables(template.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.into_iter().collect::<Vec<_>>(),
        vec!["module".to_string(), "name".to_string()]
    );
}
