//! Expression helpers shared by the extractors
//!
//! Resolution is one hop: an identifier is replaced by the
//! initializer of its declaration, and that initializer is used as-is.

use oxc_ast::ast::*;
use oxc_span::{GetSpan, Span};
use std::path::Path;

use super::symbols::{DeclarationTable, Lookup};
use crate::models::extraction::SourceLocation;

/// Strip wrappers that do not change which value an expression denotes:
/// parentheses, `as`, `satisfies`, `<T>` assertions and `!`.
pub fn peel<'s, 'a>(mut expr: &'s Expression<'a>) -> &'s Expression<'a> {
    loop {
        expr = match expr {
            Expression::ParenthesizedExpression(inner) => &inner.expression,
            Expression::TSAsExpression(inner) => &inner.expression,
            Expression::TSSatisfiesExpression(inner) => &inner.expression,
            Expression::TSTypeAssertion(inner) => &inner.expression,
            Expression::TSNonNullExpression(inner) => &inner.expression,
            _ => return expr,
        };
    }
}

/// Follow a bare identifier to its declaration's initializer, once.
///
/// Non-identifiers come back peeled. `None` means the identifier could
/// not be read: undeclared, declared without an initializer, or no table
/// was supplied.
pub fn resolve_one_hop<'s, 'a>(
    expr: &'s Expression<'a>,
    symbols: Option<&DeclarationTable<'s, 'a>>,
) -> Option<&'s Expression<'a>> {
    match peel(expr) {
        Expression::Identifier(ident) => {
            let symbols = symbols?;
            match symbols.lookup(ident.name.as_str()) {
                Lookup::Initializer(init) => Some(peel(init)),
                Lookup::NoInitializer(binding) => {
                    tracing::debug!(name = %ident.name, kind = ?binding.kind, "reference has no initializer");
                    None
                }
                Lookup::Undeclared => {
                    tracing::debug!(name = %ident.name, "reference is not declared at module scope");
                    None
                }
            }
        }
        other => Some(other),
    }
}

/// Inline object literal, or an identifier whose initializer is one
pub fn resolve_object_literal<'s, 'a>(
    expr: &'s Expression<'a>,
    symbols: Option<&DeclarationTable<'s, 'a>>,
) -> Option<&'s ObjectExpression<'a>> {
    match resolve_one_hop(expr, symbols)? {
        Expression::ObjectExpression(obj) => Some(obj),
        _ => None,
    }
}

/// Static name of a non-computed property key
pub fn property_key_name<'s>(property: &'s ObjectProperty<'_>) -> Option<&'s str> {
    if property.computed {
        return None;
    }
    match &property.key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// First plain `name: value` (or shorthand) property of an object literal
pub fn find_property<'s, 'a>(obj: &'s ObjectExpression<'a>, name: &str) -> Option<&'s ObjectProperty<'a>> {
    obj.properties.iter().find_map(|member| match member {
        ObjectPropertyKind::ObjectProperty(prop)
            if matches!(prop.kind, PropertyKind::Init) && !prop.method && property_key_name(prop) == Some(name) =>
        {
            Some(&**prop)
        }
        _ => None,
    })
}

/// Exact source text covered by `span`
pub fn span_text(source: &str, span: Span) -> &str {
    &source[span.start as usize..span.end as usize]
}

/// Exact source text of an expression
pub fn expression_text<'t>(source: &'t str, expr: &Expression<'_>) -> &'t str {
    span_text(source, expr.span())
}

/// 1-based line and column of a byte offset; a leading byte order mark
/// takes no column
pub fn location_of(source: &str, path: &Path, offset: u32) -> SourceLocation {
    let prefix = &source[..(offset as usize).min(source.len())];
    let line = prefix.matches('\n').count() + 1;
    let line_start = match prefix.rfind('\n') {
        Some(i) => i + 1,
        None if prefix.starts_with('\u{feff}') => '\u{feff}'.len_utf8(),
        None => 0,
    };
    let column = prefix[line_start..].chars().count() + 1;

    SourceLocation {
        path: path.to_path_buf(),
        line,
        column,
    }
}
