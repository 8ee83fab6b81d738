//! Loads every component folder under the scan path

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::folder_options::FolderOptionsLoader;
use crate::core::parallel::{parallel_process_with_progress, parallel_process_with_progress_and_errors, ProgressUpdate};
use crate::core::walker::ComponentWalker;
use crate::error::{handle_error, Result};
use crate::models::config::Settings;
use crate::models::folder::FolderOptions;
use crate::models::readme::ReadmeResults;

/// Collects [`FolderOptions`] for a whole components directory
pub struct ReadmeCollector {
    settings: Settings,
    walker: ComponentWalker,
    loader: FolderOptionsLoader,
}

impl ReadmeCollector {
    /// Create a collector; fails when an exclude pattern does not compile
    pub fn new(settings: Settings) -> Result<Self> {
        let walker = ComponentWalker::new(&settings)?;
        let loader = FolderOptionsLoader::from_settings(&settings);
        Ok(Self {
            settings,
            walker,
            loader,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load everything without progress reporting
    pub fn collect(&self) -> Result<ReadmeResults> {
        self.collect_with_progress(|_| {})
    }

    /// Load the global options and every component folder.
    ///
    /// Folder failures are recorded in the results; a critical failure, or
    /// any failure with `fail_fast`, aborts the run.
    pub fn collect_with_progress<P>(&self, progress_callback: P) -> Result<ReadmeResults>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let start_time = Instant::now();
        let root = self.walker.root().to_path_buf();
        let mut results = ReadmeResults::new(root.clone());

        let (dirs, traversal_errors) = self.walker.component_dirs()?;
        for (path, err) in traversal_errors {
            if self.settings.fail_fast {
                return Err(err);
            }
            results.add_error(path, &err);
            if let Some(critical) = handle_error(err) {
                return Err(critical);
            }
        }

        match self.loader.load_global(&root) {
            Ok(global) => results.global = global,
            Err(err) if self.settings.fail_fast || err.is_critical() => return Err(err),
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "global options could not be loaded");
                results.add_error(root.clone(), &err);
            }
        }

        progress_callback(ProgressUpdate::new(0, dirs.len(), format!("Found {} component folders", dirs.len())));

        if self.settings.fail_fast {
            for options in self.load_all_or_fail(dirs, &progress_callback)? {
                results.add_component(options);
            }
        } else {
            for (dir, outcome) in self.load_all(dirs, &progress_callback) {
                match outcome {
                    Ok(options) => results.add_component(options),
                    Err(err) => {
                        results.add_error(dir, &err);
                        if let Some(critical) = handle_error(err) {
                            return Err(critical);
                        }
                    }
                }
            }
        }

        results.set_duration(start_time.elapsed());
        Ok(results)
    }

    fn load_all<P>(&self, dirs: Vec<PathBuf>, progress_callback: &P) -> Vec<(PathBuf, Result<FolderOptions>)>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let load = |dir: PathBuf| {
            let outcome = self.loader.load(&dir);
            (dir, outcome)
        };

        if self.settings.parallel {
            parallel_process_with_progress(dirs, |dir| folder_label(dir), load, progress_callback)
        } else {
            let total = dirs.len();
            dirs.into_iter()
                .enumerate()
                .map(|(i, dir)| {
                    let label = folder_label(&dir);
                    let loaded = load(dir);
                    progress_callback(ProgressUpdate::new(i + 1, total, label));
                    loaded
                })
                .collect()
        }
    }

    fn load_all_or_fail<P>(&self, dirs: Vec<PathBuf>, progress_callback: &P) -> Result<Vec<FolderOptions>>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        if self.settings.parallel {
            parallel_process_with_progress_and_errors(
                dirs,
                |dir| folder_label(dir),
                |dir| self.loader.load(&dir),
                progress_callback,
            )
        } else {
            let total = dirs.len();
            dirs.iter()
                .enumerate()
                .map(|(i, dir)| {
                    let loaded = self.loader.load(dir);
                    progress_callback(ProgressUpdate::new(i + 1, total, folder_label(dir)));
                    loaded
                })
                .collect()
        }
    }
}

fn folder_label(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}
