//! Argument parsing and command execution

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use component_readme::{
    cli::{args::OutputFormat, Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::OutputFormat as SettingsFormat,
};
use tempfile::tempdir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["component-readme"]);
    assert_eq!(args.path, None);
    assert!(args.exclude.is_empty());
    assert_eq!(args.output, None);
    assert!(!args.quiet);
    assert!(!args.init);

    let args = Args::parse_from([
        "component-readme",
        "--path",
        "/test/path",
        "--exclude",
        "wip-*",
        "--exclude",
        "legacy",
        "--output",
        "json",
        "--output-file",
        "results.json",
        "--quiet",
        "--no-parallel",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/test/path")));
    assert_eq!(args.exclude, vec!["wip-*".to_string(), "legacy".to_string()]);
    assert_eq!(args.output, Some(OutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("results.json")));
    assert!(args.quiet);
    assert!(args.no_parallel);
}

#[test]
fn test_invalid_output_format_rejected() {
    assert!(Args::try_parse_from(["component-readme", "--output", "yaml"]).is_err());
}

#[test]
fn test_flags_reach_settings() {
    let dir = tempdir().unwrap();
    let args = Args::parse_from([
        "component-readme",
        "--path",
        dir.path().to_str().unwrap(),
        "--config-name",
        "demo",
        "--output",
        "md",
        "--js-only",
        "--no-colors",
    ]);

    // An unused prefix keeps ambient environment variables out of the test
    let settings = load_config_with_env_prefix(CliArgs::from_args(&args), "COMPONENT_README_CLI_TEST").unwrap();

    assert_eq!(settings.scan_path, dir.path());
    assert_eq!(settings.config_name, "demo");
    assert_eq!(settings.output_format, SettingsFormat::Markdown);
    assert!(settings.js_only);
    assert!(!settings.use_colors);
    assert!(settings.parallel);
}

#[test]
fn test_config_name_with_extension_rejected() {
    let dir = tempdir().unwrap();
    let args = Args::parse_from([
        "component-readme",
        "--path",
        dir.path().to_str().unwrap(),
        "--config-name",
        "readme.ts",
    ]);

    assert!(load_config_with_env_prefix(CliArgs::from_args(&args), "COMPONENT_README_CLI_TEST").is_err());
}

#[test]
fn test_generate_writes_output_file() {
    let dir = tempdir().unwrap();
    let components = dir.path().join("components");
    let button = components.join("button");
    fs::create_dir_all(&button).unwrap();
    fs::write(button.join("readme.js"), "module.exports = { component: () => 'button' };").unwrap();

    let config = dir.path().join("config.toml");
    fs::write(&config, "show_progress = false\n").unwrap();

    let output = dir.path().join("README.md");
    let args = Args::parse_from([
        "component-readme",
        "--path",
        components.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--output",
        "markdown",
        "--output-file",
        output.to_str().unwrap(),
        "--quiet",
    ]);

    let command = Command::from_args(args);
    assert_eq!(command.run(), 0);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "# Components\n\n## button\n\n```js\n() => 'button'\n```\n\n");
}

#[test]
fn test_missing_path_is_critical() {
    let dir = tempdir().unwrap();
    let args = Args::parse_from([
        "component-readme",
        "--path",
        dir.path().join("missing").to_str().unwrap(),
        "--quiet",
    ]);

    assert_eq!(Command::from_args(args).run(), 2);
}
