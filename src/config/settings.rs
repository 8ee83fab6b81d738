//! Settings validation

use std::path::Path;

use crate::error::{ReadmeError, Result, ResultExt};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.is_dir() {
            return Err(ReadmeError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        }

        Self::validate_config_name(&settings.config_name)?;

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The config name is a bare file stem: no separators, no extension
    pub fn validate_config_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ReadmeError::config_error("Config name must not be empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(ReadmeError::config_error(format!(
                "Config name '{}' must be a file name, not a path",
                name
            )));
        }
        if let Some(ext) = Path::new(name).extension().and_then(|ext| ext.to_str()) {
            if crate::models::language::Language::from_extension(ext).is_some() {
                return Err(ReadmeError::config_error(format!(
                    "Config name '{}' must not include the .{} extension",
                    name, ext
                )));
            }
        }
        Ok(())
    }

    /// Validate that an output path's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ReadmeError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}
