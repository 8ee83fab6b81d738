//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{format_component_markdown, format_duration};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::readme::ReadmeResults;

/// Trait for different output formatters
pub trait Formatter {
    /// Format collected results into a string
    fn format(&self, results: &ReadmeResults) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, results: &ReadmeResults) -> Result<String> {
        // In quiet mode, only output the counts
        if self.quiet {
            let summary = &results.summary;
            let mut output = format!(
                "Components: {}, props entries: {}, failed: {}\n",
                summary.components, summary.props_entries, summary.failed_folders
            );
            for error in &results.errors {
                output.push_str(&format!("{}: {}\n", error.folder.display(), error.message));
            }
            return Ok(output);
        }

        Ok(formatters::format_results_text(results, self.use_colors, self.verbose))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, results: &ReadmeResults) -> Result<String> {
        formatters::format_results_json(results)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, results: &ReadmeResults) -> Result<String> {
        formatters::format_results_csv(results)
    }
}

/// Markdown formatter producing a readme body
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self, results: &ReadmeResults) -> Result<String> {
        Ok(formatters::format_results_markdown(results))
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: &OutputFormat, use_colors: bool, verbose: bool, quiet: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}
