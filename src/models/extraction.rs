//! Results produced by the static extraction layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Part of a component config an extraction targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Component,
    Props,
    Config,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Component => write!(f, "component"),
            Role::Props => write!(f, "props"),
            Role::Config => write!(f, "config"),
        }
    }
}

/// 1-based position of a snippet inside its file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// How the component text was reached from the export literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSource {
    /// Written directly as the `component` value
    Inline,
    /// Taken from the initializer of a referenced declaration
    Declaration,
    /// A method member of any name, captured whole
    Method,
}

/// Verbatim source text of the component definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSnippet {
    pub code: String,
    pub source: ComponentSource,
    pub location: SourceLocation,
}

/// Source text of the props member
///
/// A missing props member is represented by the absence of this value;
/// `None` entries mark members that were present but did not resolve to
/// an object literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PropsText {
    Single(Option<String>),
    List(Vec<Option<String>>),
}

/// One props entry as read from source, before any consumer checks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPropsEntry {
    /// Text of the props object (first half of a tuple entry)
    pub code: Option<String>,
    /// Text of the options' `props` sub-property, when the entry is a tuple
    pub readme_code: Option<String>,
    /// Static value of the options half, when the entry is a tuple
    pub options: Option<serde_json::Value>,
}

/// Everything a folder needs from its config file, read in one parse
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedConfig {
    pub component: Option<ComponentSnippet>,
    pub props: Option<Vec<RawPropsEntry>>,
    /// Static members of the export literal
    pub config: serde_json::Value,
}
