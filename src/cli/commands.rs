//! Command implementations

use std::path::PathBuf;
use std::sync::Arc;

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::ReadmeCollector;
use crate::error::{ErrorSeverity, ReadmeError, Result};
use crate::models::config::Settings;
use crate::models::readme::ReadmeResults;
use crate::output::{self, create_formatter, create_writer, create_progress_callback, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Collect readme contents from every component folder
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                self.validate()?;

                let settings = config::load_config(CliArgs::from_args(args))?;
                tracing::debug!(?settings, "resolved settings");

                if !settings.quiet {
                    eprintln!(
                        "component-readme v{} scanning {}",
                        env!("CARGO_PKG_VERSION"),
                        settings.scan_path.display()
                    );
                }

                let results = collect(&settings)?;

                let formatter = create_formatter(
                    &settings.output_format,
                    settings.use_colors && settings.output_file.is_none(),
                    settings.verbose,
                    settings.quiet,
                );
                let content = formatter.format(&results)?;
                create_writer(settings.output_file.as_ref()).write(&content)?;

                if !settings.quiet {
                    print_summary(&settings, &results);
                }

                Ok(())
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                config::create_default_config(&config_path)?;

                println!("Created default configuration file at: {}", config_path.display());
                println!("\nSettings you will most likely want to change:");
                println!("  - scan_path: directory holding one folder per component");
                println!("  - exclude_patterns: component folders to skip");
                println!("  - config_name: base name of each folder's readme config");
                println!("  - output_format: text, json, csv or markdown");

                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                if let Some(path) = &args.path {
                    if !path.exists() {
                        return Err(ReadmeError::InvalidPath { path: path.clone() });
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(ReadmeError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and map the outcome to a process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(err.severity())
            }
        }
    }
}

/// Exit code for a failure of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

fn collect(settings: &Settings) -> Result<ReadmeResults> {
    let collector = ReadmeCollector::new(settings.clone())?;

    if settings.quiet || !settings.show_progress {
        return collector.collect();
    }

    let reporter = Arc::new(ProgressReporter::new(settings.quiet, settings.verbose));
    reporter.start(0, &format!("Scanning {}", settings.scan_path.display()));

    let results = collector.collect_with_progress(create_progress_callback(reporter.clone()));

    match &results {
        Ok(results) => reporter.finish(&format!("Loaded {} components", results.components.len())),
        Err(_) => reporter.finish("Aborted"),
    }

    results
}

fn print_summary(settings: &Settings, results: &ReadmeResults) {
    let summary = &results.summary;

    // The text format already carries the summary on stdout
    if settings.output_format == crate::models::config::OutputFormat::Text && settings.output_file.is_none() {
        return;
    }

    eprintln!(
        "{} components, {} props entries, {} failed folders in {}",
        summary.components,
        summary.props_entries,
        summary.failed_folders,
        output::format_duration(summary.duration)
    );

    if let Some(path) = &settings.output_file {
        eprintln!("Wrote {} output to {}", settings.output_format, path.display());
    }

    for error in &results.errors {
        eprintln!("  {}: {}", error.folder.display(), error.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["component-readme", "--init"]).unwrap();
        assert!(matches!(Command::from_args(args), Command::Init));

        let args = Args::try_parse_from(["component-readme", "--path", "components"]).unwrap();
        assert!(matches!(Command::from_args(args), Command::Generate(_)));
    }

    #[test]
    fn test_validate_missing_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let args = Args::try_parse_from(["component-readme", "--path", missing.to_str().unwrap()]).unwrap();

        let command = Command::from_args(args);
        assert!(matches!(command.validate(), Err(ReadmeError::InvalidPath { .. })));
        assert_eq!(command.run(), 2);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(ErrorSeverity::Warning), 0);
        assert_eq!(exit_code(ErrorSeverity::Error), 1);
        assert_eq!(exit_code(ErrorSeverity::Critical), 2);
    }
}
