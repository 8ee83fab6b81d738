//! Source dialects and the result of reading one from disk

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One of the source flavors a component config can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Typed module (`.ts`)
    Ts,
    /// Typed markup (`.tsx`)
    Tsx,
    /// Untyped (`.js`)
    Js,
}

impl Language {
    /// Probe order when the search is not restricted to the untyped dialect
    pub const PRIORITY: [Language; 3] = [Language::Ts, Language::Tsx, Language::Js];

    /// File extension, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            Language::Ts => "ts",
            Language::Tsx => "tsx",
            Language::Js => "js",
        }
    }

    /// Tag reported alongside the code that was read
    pub fn tag(self) -> &'static str {
        self.extension()
    }

    /// Map a bare extension back to its dialect
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(Language::Ts),
            "tsx" => Some(Language::Tsx),
            "js" => Some(Language::Js),
            _ => None,
        }
    }

    /// Candidate dialects for a search, in probe order
    pub fn candidates(js_only: bool) -> &'static [Language] {
        if js_only {
            &[Language::Js]
        } else {
            &Self::PRIORITY
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Source text of the dialect that was found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReadResult {
    pub code: String,
    pub language: Language,
    /// The path actually read, extension included
    pub read_path: PathBuf,
}
