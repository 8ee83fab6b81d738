//! Error context utilities for component-readme
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use std::path::Path;

use crate::error::{ErrorSeverity, ReadmeError, Result};
use crate::models::extraction::Role;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ReadmeError::Config {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Extension trait for tagging extraction failures with the role they belong to
pub trait RoleContext<T> {
    /// Wrap any error as `error parsing <role> in <path>` followed by the
    /// original message
    fn with_role<P: AsRef<Path>>(self, role: Role, path: P) -> Result<T>;
}

impl<T> RoleContext<T> for Result<T> {
    fn with_role<P: AsRef<Path>>(self, role: Role, path: P) -> Result<T> {
        self.map_err(|err| ReadmeError::extraction(role, path.as_ref(), &err))
    }
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Log the error and return Some(error)
///
/// Non-critical errors are the caller's to record.
pub fn handle_error(err: ReadmeError) -> Option<ReadmeError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            tracing::warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            tracing::error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            tracing::error!("critical: {}", message);
            Some(err)
        }
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ReadmeError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ReadmeError,
    {
        self.ok_or_else(err_fn)
    }
}
