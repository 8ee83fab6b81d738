//! Collected results for a whole components directory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::folder::{FolderOptions, GlobalOptions};
use crate::error::{ErrorSeverity, ReadmeError};

/// Severity as stored in results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl From<ErrorSeverity> for FolderErrorSeverity {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Warning => FolderErrorSeverity::Warning,
            ErrorSeverity::Error => FolderErrorSeverity::Error,
            ErrorSeverity::Critical => FolderErrorSeverity::Critical,
        }
    }
}

/// A component folder that could not be loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderError {
    pub folder: PathBuf,
    pub message: String,
    pub severity: FolderErrorSeverity,
}

impl FolderError {
    pub fn from_error(folder: PathBuf, err: &ReadmeError) -> Self {
        Self {
            folder,
            message: err.to_string(),
            severity: err.severity().into(),
        }
    }
}

/// Summary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadmeSummary {
    pub total_folders: usize,
    pub components: usize,
    pub props_entries: usize,
    pub failed_folders: usize,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Results of loading every component folder under a root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadmeResults {
    pub root: PathBuf,
    pub global: Option<GlobalOptions>,
    pub components: Vec<FolderOptions>,
    pub errors: Vec<FolderError>,
    pub summary: ReadmeSummary,
    pub generated_at: DateTime<Utc>,
}

impl ReadmeResults {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            global: None,
            components: Vec::new(),
            errors: Vec::new(),
            summary: ReadmeSummary::default(),
            generated_at: Utc::now(),
        }
    }

    pub fn add_component(&mut self, options: FolderOptions) {
        self.summary.total_folders += 1;
        self.summary.components += 1;
        self.summary.props_entries += options.props.len();
        self.components.push(options);
    }

    pub fn add_error(&mut self, folder: PathBuf, err: &ReadmeError) {
        self.summary.total_folders += 1;
        self.summary.failed_folders += 1;
        self.errors.push(FolderError::from_error(folder, err));
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.summary.duration = duration;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Title of the whole readme
    pub fn title(&self) -> Option<&str> {
        self.global.as_ref().and_then(|global| global.title.as_deref())
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
