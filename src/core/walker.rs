//! Component folder discovery
//!
//! Every direct subdirectory of the scan path is a component folder,
//! unless its name matches one of the exclude patterns.

use crate::error::{ReadmeError, Result};
use crate::models::config::Settings;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists component folders below a root directory
pub struct ComponentWalker {
    root: PathBuf,
    exclude_patterns: Vec<Pattern>,
    follow_links: bool,
}

impl ComponentWalker {
    /// Create a walker from settings, compiling the exclude patterns
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            root: settings.scan_path.clone(),
            exclude_patterns: compile_exclude_patterns(&settings.exclude_patterns)?,
            follow_links: settings.follow_links,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Component folders sorted by name, plus the entries that could not
    /// be read. A missing root is critical.
    pub fn component_dirs(&self) -> Result<(Vec<PathBuf>, Vec<(PathBuf, ReadmeError)>)> {
        if !self.root.is_dir() {
            return Err(ReadmeError::InvalidPath {
                path: self.root.clone(),
            });
        }

        let mut dirs = Vec::new();
        let mut errors = Vec::new();

        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in entries {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_dir() {
                        continue;
                    }
                    if self.is_excluded(entry.path()) {
                        tracing::debug!(folder = %entry.path().display(), "excluded component folder");
                        continue;
                    }
                    dirs.push(entry.into_path());
                }
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
                    let denied = err
                        .io_error()
                        .map(|io| io.kind() == std::io::ErrorKind::PermissionDenied)
                        .unwrap_or(false);
                    let error = if denied {
                        ReadmeError::permission_denied(&path)
                    } else {
                        ReadmeError::directory_traversal_error(&path, err.to_string())
                    };
                    errors.push((path, error));
                }
            }
        }

        Ok((dirs, errors))
    }

    /// Whether a folder's name, or its full path, matches an exclude pattern
    pub fn is_excluded(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(&name) || pattern.matches_path(path))
    }
}

/// Compile exclude patterns into glob patterns
pub fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| Pattern::new(pattern).map_err(|source| ReadmeError::GlobPattern { source }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings_for(root: &Path) -> Settings {
        Settings {
            scan_path: root.to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_lists_direct_subdirectories_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["button", "avatar", "node_modules", ".hidden", "__snapshots__"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::create_dir_all(dir.path().join("avatar/nested")).unwrap();
        fs::write(dir.path().join("readme.ts"), "export default {};").unwrap();

        let walker = ComponentWalker::new(&settings_for(dir.path())).unwrap();
        let (dirs, errors) = walker.component_dirs().unwrap();

        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["avatar", "button"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_root_is_critical() {
        let dir = TempDir::new().unwrap();
        let walker = ComponentWalker::new(&settings_for(&dir.path().join("missing"))).unwrap();
        let err = walker.component_dirs().unwrap_err();
        assert!(err.is_critical());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let settings = Settings {
            exclude_patterns: vec!["[".to_string()],
            ..Settings::default()
        };
        assert!(matches!(
            ComponentWalker::new(&settings),
            Err(ReadmeError::GlobPattern { .. })
        ));
    }
}
