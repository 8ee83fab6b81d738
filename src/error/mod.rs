//! Error handling for component-readme
//!
//! This module provides the error type, result alias, severity levels and
//! the context helpers used to tag failures with their file and role.

pub mod context;
pub mod types;

pub use context::{handle_error, OptionExt, ResultExt, RoleContext};
pub use types::{ErrorSeverity, ReadmeError, Result};
