//! Static extraction from component config files
//!
//! The layers build on each other: the source parser produces a program,
//! the declaration table indexes its top-level bindings, the export
//! locator finds the export literal, and the member scan feeds the
//! component and props extractors.

pub mod ast_parser;
pub mod export_literal;
pub mod members;
pub mod props;
pub mod resolve;
pub mod snippets;
pub mod static_value;
pub mod symbols;

pub use ast_parser::SourceParser;
pub use export_literal::{find_export_literal, ExportSearch, ExportStyle};
pub use members::{scan_members, MemberScan, MemberShape};
pub use snippets::SnippetExtractor;
pub use symbols::{BindingKind, DeclarationTable, Lookup};
