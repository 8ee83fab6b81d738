//! End-to-end collection of a components directory

use std::fs;
use std::path::Path;

use component_readme::{
    models::{config::OutputFormat, readme::FolderErrorSeverity},
    output::create_formatter,
    ReadmeCollector, Result, Settings,
};
use tempfile::tempdir;

/// A components directory mixing dialects, exclusions and a broken folder
fn create_components(root: &Path) -> Result<()> {
    fs::write(
        root.join("readme.js"),
        "module.exports = { title: 'Design System', description: 'Shared components.' };",
    )?;

    let button = root.join("button");
    fs::create_dir(&button)?;
    fs::write(
        button.join("readme.tsx"),
        r#"const Button = ({ label }: { label: string }) => <button>{label}</button>;

const primary = { label: 'Save' };

export default {
  title: 'Button',
  description: 'Triggers an action.',
  component: Button,
  props: [
    primary,
    [{ label: 'Delete', onClick }, { alt: 'Destructive', props: { label: 'Delete' } }],
  ],
};
"#,
    )?;

    let card = root.join("card");
    fs::create_dir(&card)?;
    fs::write(
        card.join("readme.js"),
        "module.exports = {\n  component: function Card(props) { return props.children; },\n};\n",
    )?;

    let broken = root.join("dialog");
    fs::create_dir(&broken)?;
    fs::write(broken.join("readme.ts"), "export = { props: {} };")?;

    let ignored = root.join("wip-table");
    fs::create_dir(&ignored)?;
    fs::write(ignored.join("readme.js"), "this is not javascript")?;

    // Plain files next to the folders are not components
    fs::write(root.join("index.ts"), "export {};")?;

    Ok(())
}

fn settings(root: &Path) -> Settings {
    Settings {
        scan_path: root.to_path_buf(),
        exclude_patterns: vec!["wip-*".to_string()],
        ..Settings::default()
    }
}

#[test]
fn test_collect_components_directory() {
    let dir = tempdir().unwrap();
    create_components(dir.path()).unwrap();

    for parallel in [true, false] {
        let results = ReadmeCollector::new(Settings {
            parallel,
            ..settings(dir.path())
        })
        .unwrap()
        .collect()
        .unwrap();

        assert_eq!(results.title(), Some("Design System"));

        let names: Vec<&str> = results.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["button", "card"]);

        let button = &results.components[0];
        assert_eq!(button.component.code, "({ label }: { label: string }) => <button>{label}</button>");
        assert_eq!(button.props.len(), 2);
        assert_eq!(button.props[0].code, "{ label: 'Save' }");
        assert_eq!(button.props[1].code, "{ label: 'Delete', onClick }");
        assert_eq!(button.props[1].display_code(), "{ label: 'Delete' }");
        assert_eq!(button.props[1].options.alt.as_deref(), Some("Destructive"));

        let card = &results.components[1];
        assert_eq!(card.title(), "card");
        assert!(card.props.is_empty());

        assert_eq!(results.errors.len(), 1);
        assert_eq!(results.errors[0].folder, dir.path().join("dialog"));
        assert_eq!(results.errors[0].severity, FolderErrorSeverity::Error);
        assert_eq!(
            results.errors[0].message,
            format!("could not parse component in {}", dir.path().join("dialog").join("readme.ts").display())
        );

        assert_eq!(results.summary.total_folders, 3);
        assert_eq!(results.summary.props_entries, 2);
    }
}

#[test]
fn test_fail_fast_stops_on_broken_folder() {
    let dir = tempdir().unwrap();
    create_components(dir.path()).unwrap();

    let err = ReadmeCollector::new(Settings {
        fail_fast: true,
        ..settings(dir.path())
    })
    .unwrap()
    .collect()
    .unwrap_err();

    assert!(err.to_string().starts_with("could not parse component in"));
}

#[test]
fn test_js_only_skips_typed_configs() {
    let dir = tempdir().unwrap();
    create_components(dir.path()).unwrap();

    let results = ReadmeCollector::new(Settings {
        js_only: true,
        ..settings(dir.path())
    })
    .unwrap()
    .collect()
    .unwrap();

    let names: Vec<&str> = results.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["card"]);
    assert_eq!(results.errors.len(), 2);
    assert!(results.errors[0].message.starts_with("cannot find `"));
}

#[test]
fn test_markdown_readme_from_directory() {
    let dir = tempdir().unwrap();
    create_components(dir.path()).unwrap();

    let results = ReadmeCollector::new(settings(dir.path())).unwrap().collect().unwrap();
    let markdown = create_formatter(&OutputFormat::Markdown, false, false, false)
        .format(&results)
        .unwrap();

    assert!(markdown.starts_with("# Design System\n\nShared components.\n\n## Button\n\nTriggers an action.\n\n"));
    assert!(markdown.contains("**Destructive**\n\n```tsx\n{ label: 'Delete' }\n```"));
    assert!(markdown.contains("## card\n\n```js\nfunction Card(props) { return props.children; }\n```"));
    assert!(!markdown.contains("dialog"));
}
