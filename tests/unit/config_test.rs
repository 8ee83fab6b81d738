use std::path::PathBuf;

use component_readme::{
    config::{parse_config_content, parser::DEFAULT_CONFIG_TEMPLATE, ConfigBuilder},
    error::Result,
    models::config::{OutputFormat, PartialSettings, Settings},
    ReadmeError,
};
use tempfile::tempdir;

#[test]
fn test_default_template_matches_builtin_defaults() -> Result<()> {
    let temp_dir = tempdir()?;
    let mut partial = parse_config_content(DEFAULT_CONFIG_TEMPLATE, "template.toml")?;
    partial.scan_path = Some(temp_dir.path().to_path_buf());

    let settings = ConfigBuilder::new().merge(partial).build()?;

    assert_eq!(
        settings,
        Settings {
            scan_path: temp_dir.path().to_path_buf(),
            ..Settings::default()
        }
    );
    Ok(())
}

#[test]
fn test_partial_settings_merge() -> Result<()> {
    let mut base = PartialSettings {
        scan_path: Some(PathBuf::from("/base/path")),
        exclude_patterns: Some(vec!["node_modules".to_string()]),
        output_format: Some(OutputFormat::Text),
        ..Default::default()
    };

    let override_settings = PartialSettings {
        exclude_patterns: Some(vec!["dist".to_string(), "wip-*".to_string()]),
        output_format: Some(OutputFormat::Markdown),
        fail_fast: Some(true),
        ..Default::default()
    };

    base.merge_from(override_settings);

    assert_eq!(base.scan_path, Some(PathBuf::from("/base/path"))); // Unchanged
    assert_eq!(
        base.exclude_patterns,
        Some(vec!["dist".to_string(), "wip-*".to_string()])
    );
    assert_eq!(base.output_format, Some(OutputFormat::Markdown));
    assert_eq!(base.fail_fast, Some(true));

    Ok(())
}

#[test]
fn test_unknown_format_in_file_is_parse_error() {
    let err = parse_config_content("output_format = \"yaml\"", "bad.toml").unwrap_err();
    assert!(matches!(err, ReadmeError::ConfigParse { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_output_format_names() {
    assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Csv.to_string(), "csv");
}
