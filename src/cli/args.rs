//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// component-readme - readme contents from component config files
#[derive(Parser, Debug)]
#[command(name = "component-readme")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract component and props snippets from per-folder config files")]
#[command(long_about = "component-readme scans a directory holding one folder per UI component. \
Each folder carries a readme config file (readme.ts, readme.tsx or readme.js) that exports an object \
with a `component` and optional `props`. The exact source text of both is extracted statically, \
without running any code, and reported as text, JSON, CSV or a markdown readme body.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory
    component-readme

    # Scan a specific components directory
    component-readme --path ./src/components

    # Skip folders matching glob patterns (can specify multiple patterns)
    component-readme --exclude 'wip-*' --exclude legacy

Config Files:
    # Look for `demo.{ts,tsx,js}` instead of `readme.{ts,tsx,js}`
    component-readme --config-name demo

    # Only consider untyped config files
    component-readme --js-only

Output Options:
    # Markdown readme body
    component-readme --output markdown --output-file README.md

    # JSON for other tools
    component-readme --output json

    # Disable colored output
    component-readme --no-colors

Behaviour:
    # Stop at the first folder that fails
    component-readme --fail-fast

    # Load folders one at a time
    component-readme --no-parallel

Configuration:
    # Use a specific configuration file
    component-readme --config ./component-readme.toml

    # Create a default configuration file
    component-readme --init
")]
pub struct Args {
    /// Components directory to scan
    #[arg(short, long, value_name = "PATH", help = "Directory holding one folder per component (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Skip component folders matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for component folders to skip (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Base name of the config file in every folder
    #[arg(long, value_name = "NAME", help = "Base name of each folder's config file, without extension (default: readme)")]
    pub config_name: Option<String>,

    /// Only look for `.js` config files
    #[arg(long, help = "Only look for untyped (.js) config files instead of trying .ts, .tsx and .js in that order")]
    pub js_only: bool,

    /// Output format
    #[arg(short, long, value_enum, help = "Output format: 'text' for a summary, 'json' or 'csv' for tools, 'markdown' for a readme body")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only show results)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress and debug logging")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .component-readme.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Disable parallel processing
    #[arg(long, help = "Load component folders one at a time")]
    pub no_parallel: bool,

    /// Stop at the first failing folder
    #[arg(long, help = "Abort the run as soon as one component folder fails to load")]
    pub fail_fast: bool,

    /// Follow symbolic links when listing folders
    #[arg(long, help = "Treat symbolic links to directories as component folders")]
    pub follow_links: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful when piping output)")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.component-readme.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per component
    Csv,
    /// Readme body in markdown
    #[value(alias = "md")]
    Markdown,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "component-readme",
            "--path",
            "components",
            "--exclude",
            "wip-*",
            "--config-name",
            "demo",
            "--output",
            "md",
            "--js-only",
            "--fail-fast",
        ])
        .unwrap();

        assert_eq!(args.path, Some(PathBuf::from("components")));
        assert_eq!(args.exclude, vec!["wip-*".to_string()]);
        assert_eq!(args.config_name.as_deref(), Some("demo"));
        assert_eq!(args.output, Some(OutputFormat::Markdown));
        assert!(args.js_only);
        assert!(args.fail_fast);
        assert!(!args.no_parallel);
    }

    #[test]
    fn test_output_defaults_to_unset() {
        let args = Args::try_parse_from(["component-readme"]).unwrap();
        assert_eq!(args.output, None);
    }
}
