//! Extraction entry points
//!
//! Each call parses the file, builds its declaration table, locates the
//! export literal and returns owned source text. Nothing is cached
//! between calls; `extract_config` reads every role from one parse.

use oxc_ast::ast::ObjectExpression;
use std::path::Path;

use super::ast_parser::SourceParser;
use super::export_literal::{find_export_literal, ExportSearch, ExportStyle};
use super::members::{scan_members, ComponentMatch, MemberScan};
use super::props::PropsConverter;
use super::resolve::{location_of, span_text};
use super::static_value::static_object;
use super::symbols::{BindingKind, DeclarationTable};
use crate::error::{ReadmeError, Result};
use crate::models::extraction::{ComponentSnippet, ExtractedConfig, PropsText, RawPropsEntry};
use crate::models::language::Language;

/// Static extractor for component config files
#[derive(Default)]
pub struct SnippetExtractor {
    parser: SourceParser,
}

impl SnippetExtractor {
    pub fn new() -> Self {
        Self {
            parser: SourceParser::new(),
        }
    }

    /// Verbatim text of the component definition, `None` when no member
    /// of the export literal matches
    pub fn extract_component(&self, path: &Path, code: &str, language: Language) -> Result<Option<ComponentSnippet>> {
        self.with_export(path, code, language, |literal, symbols| {
            let scan = scan_members(literal, Some(symbols));
            warn_unresolved_imports(path, &scan);

            Ok(scan.component.map(|found| component_snippet(path, code, found)))
        })
    }

    /// Component, props entries and static options from a single parse
    /// and a single member scan
    pub fn extract_config(&self, path: &Path, code: &str, language: Language) -> Result<ExtractedConfig> {
        self.with_export(path, code, language, |literal, symbols| {
            let scan = scan_members(literal, Some(symbols));
            warn_unresolved_imports(path, &scan);

            let converter = PropsConverter::new(code, Some(symbols));
            Ok(ExtractedConfig {
                component: scan.component.map(|found| component_snippet(path, code, found)),
                props: scan.props.map(|props| converter.to_entries(props)),
                config: static_object(literal, Some(symbols)),
            })
        })
    }

    /// Text of the props member; `None` when there is no props member.
    ///
    /// With `sub_property`, each entry's text is taken from the object
    /// under that key instead (the options half for tuple entries).
    pub fn extract_props(
        &self,
        path: &Path,
        code: &str,
        language: Language,
        sub_property: Option<&str>,
    ) -> Result<Option<PropsText>> {
        self.with_export(path, code, language, |literal, symbols| {
            let converter = PropsConverter::new(code, Some(symbols));
            Ok(scan_members(literal, Some(symbols))
                .props
                .map(|props| converter.to_text(props, sub_property)))
        })
    }

    /// Props entries with their readme override and static options
    pub fn extract_props_entries(
        &self,
        path: &Path,
        code: &str,
        language: Language,
    ) -> Result<Option<Vec<RawPropsEntry>>> {
        self.with_export(path, code, language, |literal, symbols| {
            let converter = PropsConverter::new(code, Some(symbols));
            Ok(scan_members(literal, Some(symbols))
                .props
                .map(|props| converter.to_entries(props)))
        })
    }

    /// Static members of the export literal as JSON.
    ///
    /// Unlike the other calls, a file without a definitive export yields
    /// `None` here; the global config file is allowed to export nothing.
    pub fn extract_static_config(
        &self,
        path: &Path,
        code: &str,
        language: Language,
    ) -> Result<Option<serde_json::Value>> {
        self.parser.parse_with(path, code, language, |program| {
            let symbols = DeclarationTable::build(program);
            Ok(find_export_literal(program, ExportStyle::for_language(language), Some(&symbols))
                .literal()
                .map(|literal| static_object(literal, Some(&symbols))))
        })
    }

    /// Run `f` over the file's single export literal
    fn with_export<T, F>(&self, path: &Path, code: &str, language: Language, f: F) -> Result<T>
    where
        F: for<'s, 'a> FnOnce(&'s ObjectExpression<'a>, &DeclarationTable<'s, 'a>) -> Result<T>,
    {
        self.parser.parse_with(path, code, language, |program| {
            let symbols = DeclarationTable::build(program);
            tracing::debug!(path = %path.display(), declarations = symbols.len(), "built declaration table");

            match find_export_literal(program, ExportStyle::for_language(language), Some(&symbols)) {
                ExportSearch::Definitive(literal) => f(literal, &symbols),
                ExportSearch::NotDefinitive { candidates } => Err(ReadmeError::AmbiguousExport {
                    path: path.to_path_buf(),
                    candidates,
                }),
            }
        })
    }
}

fn component_snippet(path: &Path, code: &str, found: ComponentMatch) -> ComponentSnippet {
    ComponentSnippet {
        code: span_text(code, found.span).to_string(),
        source: found.source,
        location: location_of(code, path, found.span.start),
    }
}

fn warn_unresolved_imports(path: &Path, scan: &MemberScan<'_, '_>) {
    for unresolved in &scan.unresolved_components {
        match unresolved.binding {
            Some(binding) if binding.kind == BindingKind::Import => {
                tracing::warn!(
                    path = %path.display(),
                    name = unresolved.name,
                    import = binding.import_source.unwrap_or_default(),
                    "component is imported; only definitions in the same file can be extracted"
                );
            }
            _ => {
                tracing::debug!(path = %path.display(), name = unresolved.name, "component reference not resolved");
            }
        }
    }
}
