//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ReadmeError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".component-readme.toml";

/// Prefix of the environment variables read by [`EnvConfig`]
pub const ENV_PREFIX: &str = "COMPONENT_README";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20, // Higher priority than environment variables but lower than CLI
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ReadmeError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

/// Variable suffixes understood by [`EnvConfig`]
const ENV_KEYS: [&str; 7] = [
    "SCAN_PATH",
    "EXCLUDE",
    "CONFIG_NAME",
    "JS_ONLY",
    "OUTPUT_FORMAT",
    "PARALLEL",
    "FAIL_FAST",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10, // Lower priority than file config
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn flag(&self, key: &str) -> Result<Option<bool>> {
        self.var(key)
            .map(|value| match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                other => Err(ReadmeError::config_error(format!(
                    "{}_{} must be a boolean, got '{}'",
                    self.prefix, key, other
                ))),
            })
            .transpose()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("SCAN_PATH") {
            settings.scan_path = Some(PathBuf::from(path));
        }

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_patterns = Some(
                exclude
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(name) = self.var("CONFIG_NAME") {
            settings.config_name = Some(name);
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            settings.output_format = Some(format.parse().map_err(ReadmeError::config_error)?);
        }

        settings.js_only = self.flag("JS_ONLY")?;
        settings.parallel = self.flag("PARALLEL")?;
        settings.fail_fast = self.flag("FAIL_FAST")?;

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
