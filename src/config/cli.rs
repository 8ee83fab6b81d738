//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments that map onto settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub config_name: Option<String>,
    pub js_only: bool,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_parallel: bool,
    pub fail_fast: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub follow_links: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Markdown => OutputFormat::Markdown,
        }
    }
}

impl CliArgs {
    pub fn from_args(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            config_name: args.config_name.clone(),
            js_only: args.js_only,
            output_format: args.output.map(OutputFormat::from),
            output_file: args.output_file.clone(),
            no_parallel: args.no_parallel,
            fail_fast: args.fail_fast,
            quiet: args.quiet,
            verbose: args.verbose,
            follow_links: args.follow_links,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            scan_path: self.args.path.clone(),
            exclude_patterns: self.args.exclude.clone(),
            config_name: self.args.config_name.clone(),
            output_format: self.args.output_format,
            output_file: self.args.output_file.clone(),
            ..PartialSettings::default()
        };

        // Flags only ever switch away from the default
        if self.args.js_only {
            settings.js_only = Some(true);
        }
        if self.args.no_parallel {
            settings.parallel = Some(false);
        }
        if self.args.fail_fast {
            settings.fail_fast = Some(true);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }
        if self.args.no_colors {
            settings.use_colors = Some(false);
        }
        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
