//! Per-component configuration assembled from a component folder

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::extraction::ComponentSnippet;
use super::language::Language;

/// Companion options of a `[props, options]` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryOptions {
    /// Alt text for the entry's screenshot
    pub alt: Option<String>,
    /// Markdown shown with the entry instead of the generated text
    pub readme: Option<String>,
    /// Screenshot options passed through untouched
    pub screenshot: Option<serde_json::Value>,
}

/// One demonstration state of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropsEntry {
    pub index: usize,
    /// Props object text used to render the entry
    pub code: String,
    /// Props text to show in the readme when it differs from `code`
    pub readme_code: Option<String>,
    pub options: EntryOptions,
}

impl PropsEntry {
    /// Text that belongs in the readme for this entry
    pub fn display_code(&self) -> &str {
        self.readme_code.as_deref().unwrap_or(&self.code)
    }
}

/// Static metadata declared next to `component` and `props`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub readme: Option<String>,
    pub screenshot: Option<serde_json::Value>,
}

/// Options from the root-level config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub screenshot: Option<serde_json::Value>,
}

/// Everything known about one component folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderOptions {
    /// Folder name, used as the default title
    pub name: String,
    pub folder: PathBuf,
    pub config_path: PathBuf,
    pub language: Language,
    pub component: ComponentSnippet,
    pub props: Vec<PropsEntry>,
    pub meta: FolderMeta,
}

impl FolderOptions {
    /// Title shown in the readme heading
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.name)
    }
}
