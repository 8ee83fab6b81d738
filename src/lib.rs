//! component-readme - readme contents from per-folder component configs
//!
//! This library statically reads the `component` and `props` members of the
//! object exported by each component folder's config file (`readme.ts`,
//! `readme.tsx` or `readme.js`) and returns their exact source text, without
//! executing anything.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{ComponentWalker, FolderOptionsLoader, ReadmeCollector};
pub use error::{handle_error, ErrorSeverity, OptionExt, ReadmeError, Result, ResultExt};
pub use models::{
    config::Settings,
    extraction::{ComponentSnippet, PropsText, Role, SourceLocation},
    folder::{FolderOptions, GlobalOptions, PropsEntry},
    language::{Language, LanguageReadResult},
    readme::{ReadmeResults, ReadmeSummary},
};
pub use parsers::SnippetExtractor;
pub use utils::{read_language, require_language};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
