//! Progress reporting functionality
//!
//! Bars draw to stderr so stdout stays clean for formatted output.

use crate::core::parallel::ProgressUpdate;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::sync::Arc;

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Progress reporter for loading component folders
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    _multi_progress: MultiProgress,
    main_progress_bar: Option<ProgressBar>,
    message_bar: Option<ProgressBar>,
    current_operation: Mutex<String>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let multi_progress = MultiProgress::new();

        // Don't create progress bars in quiet mode
        let (main_progress_bar, message_bar) = if quiet {
            (None, None)
        } else {
            let main_bar = multi_progress.add(ProgressBar::new(0));
            main_bar.set_style(
                ProgressStyle::default_bar()
                    .template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );

            let msg_bar = multi_progress.add(ProgressBar::new(1));
            msg_bar.set_style(
                ProgressStyle::default_bar()
                    .template("{wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            (Some(main_bar), Some(msg_bar))
        };

        Self {
            quiet,
            verbose,
            _multi_progress: multi_progress,
            main_progress_bar,
            message_bar,
            current_operation: Mutex::new(String::new()),
        }
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_position(0);
        }

        if let Some(msg_bar) = &self.message_bar {
            msg_bar.set_message(operation.to_string());
        }

        *self.current_operation.lock() = operation.to_string();

        if self.verbose {
            tracing::debug!(operation, "progress started");
        }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        }

        let mut current_op = self.current_operation.lock();
        if message != *current_op {
            if let Some(msg_bar) = &self.message_bar {
                msg_bar.set_message(message.to_string());
            }
            *current_op = message.to_string();
        }

        if self.verbose {
            tracing::debug!(current, total, message, "progress");
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total, &progress.message);
    }

    /// Finish the progress operation
    pub fn finish(&self, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.finish_and_clear();
        }

        if let Some(msg_bar) = &self.message_bar {
            msg_bar.finish_with_message(message.to_string());
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
