//! Dialect resolution for extension-less config paths

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReadmeError, Result};
use crate::models::language::{Language, LanguageReadResult};

/// `base` with the dialect's extension appended
pub fn with_extension(base: &Path, language: Language) -> PathBuf {
    let mut path: OsString = base.as_os_str().to_owned();
    path.push(".");
    path.push(language.extension());
    PathBuf::from(path)
}

/// Paths to probe for `base`, in priority order
pub fn candidate_paths(base: &Path, js_only: bool) -> Vec<(Language, PathBuf)> {
    Language::candidates(js_only)
        .iter()
        .map(|&language| (language, with_extension(base, language)))
        .collect()
}

/// Read the first candidate that exists; `None` when none does
pub fn read_language(base: &Path, js_only: bool) -> Result<Option<LanguageReadResult>> {
    for (language, path) in candidate_paths(base, js_only) {
        if !path.is_file() {
            continue;
        }

        let code = fs::read_to_string(&path).map_err(|source| ReadmeError::IoRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), %language, "resolved config dialect");

        return Ok(Some(LanguageReadResult {
            code,
            language,
            read_path: path,
        }));
    }

    Ok(None)
}

/// Like [`read_language`], but absence is a `NotFound` error naming every
/// path that was tried
pub fn require_language(base: &Path, js_only: bool) -> Result<LanguageReadResult> {
    match read_language(base, js_only)? {
        Some(found) => Ok(found),
        None => Err(ReadmeError::not_found(
            candidate_paths(base, js_only).into_iter().map(|(_, path)| path).collect(),
        )),
    }
}
