//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{ReadmeError, Result};
use crate::models::config::PartialSettings;

/// Embedded template written by `--init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReadmeError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ReadmeError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| ReadmeError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(ReadmeError::config_error(format!(
                "Invalid empty scan_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(ReadmeError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).map_err(|e| {
                ReadmeError::config_error(format!(
                    "Invalid exclude pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(config_name) = &settings.config_name {
        if config_name.trim().is_empty() {
            return Err(ReadmeError::config_error(format!(
                "Invalid empty config_name in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ReadmeError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("component-readme").join("config.toml"));
    }

    locations
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for location in default_config_locations() {
        if location.is_file() {
            tracing::debug!(path = %location.display(), "using configuration file");
            return Ok(Some(parse_config_file(location)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ReadmeError::io_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| ReadmeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
