//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base name of the per-folder config file when nothing else is configured
pub const DEFAULT_CONFIG_NAME: &str = "readme";

/// Main configuration settings for component-readme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding one subfolder per component
    pub scan_path: PathBuf,

    /// Glob patterns for component folders to skip
    pub exclude_patterns: Vec<String>,

    /// Base name (without extension) of the config file in each folder
    pub config_name: String,

    /// Only look for untyped (`.js`) config files
    pub js_only: bool,

    /// Output format (text, json, csv, markdown)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to load component folders in parallel
    pub parallel: bool,

    /// Stop at the first folder that fails to load
    pub fail_fast: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,

    /// Whether to follow symbolic links when listing component folders
    pub follow_links: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            exclude_patterns: vec![
                "node_modules".to_string(),
                ".*".to_string(),
                "__*".to_string(),
            ],
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            js_only: false,
            output_format: OutputFormat::Text,
            output_file: None,
            parallel: true,
            fail_fast: false,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
            follow_links: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per component
    Csv,
    /// Readme body in markdown
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub config_name: Option<String>,
    pub js_only: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub parallel: Option<bool>,
    pub fail_fast: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
    pub follow_links: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.config_name.is_some() {
            self.config_name = other.config_name;
        }
        if other.js_only.is_some() {
            self.js_only = other.js_only;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.fail_fast.is_some() {
            self.fail_fast = other.fail_fast;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_path) = &self.scan_path {
            settings.scan_path = scan_path.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(config_name) = &self.config_name {
            settings.config_name = config_name.clone();
        }
        if let Some(js_only) = self.js_only {
            settings.js_only = js_only;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(fail_fast) = self.fail_fast {
            settings.fail_fast = fail_fast;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }

        settings
    }
}
