//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{ReadmeError, Result};
use crate::models::folder::{FolderOptions, PropsEntry};
use crate::models::readme::{FolderErrorSeverity, ReadmeResults};
use ansi_term::Colour::{Blue, Cyan, Green, Purple, Red, Yellow};
use ansi_term::Style;
use std::time::Duration;

/// Heading used when the root config does not name the readme
const DEFAULT_TITLE: &str = "Components";

/// Format one component folder as text
pub fn format_component_text(component: &FolderOptions, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!(
            "{} {}\n",
            Blue.bold().paint(component.title()),
            Style::new().dimmed().paint(format!("({})", component.language))
        ));
    } else {
        output.push_str(&format!("{} ({})\n", component.title(), component.language));
    }

    if use_colors {
        output.push_str(&format!(
            "  Config: {}\n",
            Style::new().dimmed().paint(component.config_path.display().to_string())
        ));
    } else {
        output.push_str(&format!("  Config: {}\n", component.config_path.display()));
    }

    output.push_str(&format!("  Component: {}\n", component.component.location));
    output.push_str(&format!("  Props entries: {}\n", component.props.len()));

    if verbose {
        if let Some(description) = &component.meta.description {
            output.push_str(&format!("  Description: {}\n", description));
        }

        output.push_str("\n  Component source:\n");
        output.push_str(&indent(&component.component.code, 4));

        for entry in &component.props {
            let label = match &entry.options.alt {
                Some(alt) => format!("  Props #{} ({}):\n", entry.index, alt),
                None => format!("  Props #{}:\n", entry.index),
            };
            if use_colors {
                output.push_str(&Cyan.paint(label).to_string());
            } else {
                output.push_str(&label);
            }
            output.push_str(&indent(entry.display_code(), 4));
        }
    }

    output.push('\n');
    output
}

/// Format collected results as text
pub fn format_results_text(results: &ReadmeResults, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n\n", Blue.bold().paint("Component Readme Summary")));
    } else {
        output.push_str("Component Readme Summary\n\n");
    }

    let summary = &results.summary;

    if let Some(title) = results.title() {
        output.push_str(&format!("Title: {}\n", title));
    }
    output.push_str(&format!("Root: {}\n", results.root.display()));
    output.push_str(&format!("Component folders: {}\n", summary.total_folders));

    let loaded = format!("Components loaded: {}", summary.components);
    if use_colors {
        output.push_str(&format!("{}\n", Green.paint(loaded)));
    } else {
        output.push_str(&format!("{}\n", loaded));
    }

    output.push_str(&format!("Props entries: {}\n", summary.props_entries));
    output.push_str(&format!("Scan duration: {}\n", format_duration(summary.duration)));

    if summary.failed_folders > 0 {
        let failed = format!("Failed folders: {}", summary.failed_folders);
        if use_colors {
            output.push_str(&format!("\n{}\n", Yellow.bold().paint(failed)));
        } else {
            output.push_str(&format!("\n{}\n", failed));
        }

        for error in &results.errors {
            let severity = match error.severity {
                FolderErrorSeverity::Warning => "warning",
                FolderErrorSeverity::Error => "error",
                FolderErrorSeverity::Critical => "critical",
            };
            let tag = if use_colors {
                match error.severity {
                    FolderErrorSeverity::Warning => Yellow.paint(severity).to_string(),
                    FolderErrorSeverity::Error => Red.paint(severity).to_string(),
                    FolderErrorSeverity::Critical => Purple.bold().paint(severity).to_string(),
                }
            } else {
                severity.to_string()
            };
            output.push_str(&format!("  [{}] {}: {}\n", tag, error.folder.display(), error.message));
        }
    }

    if !results.components.is_empty() {
        output.push_str("\nComponents:\n\n");
        for component in &results.components {
            output.push_str(&format_component_text(component, use_colors, verbose));
        }
    }

    output
}

/// Format collected results as pretty JSON
pub fn format_results_json(results: &ReadmeResults) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(|source| ReadmeError::JsonSerialize { source })
}

/// Format collected results as CSV, one row per component
pub fn format_results_csv(results: &ReadmeResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "name",
        "title",
        "folder",
        "config_path",
        "language",
        "component_source",
        "component_line",
        "component_column",
        "props_entries",
    ])?;

    for component in &results.components {
        writer.write_record([
            component.name.as_str(),
            component.title(),
            &component.folder.display().to_string(),
            &component.config_path.display().to_string(),
            component.language.tag(),
            &format!("{:?}", component.component.source).to_lowercase(),
            &component.component.location.line.to_string(),
            &component.component.location.column.to_string(),
            &component.props.len().to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReadmeError::io_error(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|source| ReadmeError::CsvSerialize { source })
}

/// Format collected results as a markdown readme body
pub fn format_results_markdown(results: &ReadmeResults) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", results.title().unwrap_or(DEFAULT_TITLE)));

    if let Some(description) = results.global.as_ref().and_then(|global| global.description.as_deref()) {
        output.push_str(description.trim());
        output.push_str("\n\n");
    }

    for component in &results.components {
        output.push_str(&format_component_markdown(component));
    }

    output
}

/// One `##` section per component
pub fn format_component_markdown(component: &FolderOptions) -> String {
    let mut output = format!("## {}\n\n", component.title());

    if let Some(description) = &component.meta.description {
        output.push_str(description.trim());
        output.push_str("\n\n");
    }

    if let Some(readme) = &component.meta.readme {
        output.push_str(readme.trim());
        output.push_str("\n\n");
    }

    let fence = fence_language(component);
    output.push_str(&code_block(fence, &component.component.code));

    for entry in &component.props {
        output.push_str(&format_entry_markdown(entry, fence));
    }

    output
}

fn format_entry_markdown(entry: &PropsEntry, fence: &str) -> String {
    let mut output = String::new();

    if let Some(alt) = &entry.options.alt {
        output.push_str(&format!("**{}**\n\n", alt.trim()));
    }

    if let Some(readme) = &entry.options.readme {
        output.push_str(readme.trim());
        output.push_str("\n\n");
    }

    output.push_str(&code_block(fence, entry.display_code()));
    output
}

fn fence_language(component: &FolderOptions) -> &'static str {
    match component.language.tag() {
        "js" => "js",
        _ => "tsx",
    }
}

fn code_block(language: &str, code: &str) -> String {
    format!("```{}\n{}\n```\n\n", language, code.trim_end())
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut output = String::new();
    for line in text.lines() {
        output.push_str(&pad);
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Human-readable duration
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
