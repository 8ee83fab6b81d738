//! Data models and structures for component-readme

pub mod config;
pub mod extraction;
pub mod folder;
pub mod language;
pub mod readme;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use extraction::{ComponentSnippet, ComponentSource, ExtractedConfig, PropsText, RawPropsEntry, Role, SourceLocation};
pub use folder::{EntryOptions, FolderMeta, FolderOptions, GlobalOptions, PropsEntry};
pub use language::{Language, LanguageReadResult};
pub use readme::{FolderError, FolderErrorSeverity, ReadmeResults, ReadmeSummary};
