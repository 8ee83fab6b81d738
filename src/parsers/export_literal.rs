//! Export-literal locator
//!
//! Finds the one object literal a config file exposes, either through
//! `module.exports = …` (untyped dialect) or through `export = …` /
//! `export default …` (typed dialects).

use oxc_ast::ast::*;
use oxc_syntax::operator::AssignmentOperator;

use super::resolve::{peel, resolve_object_literal};
use super::symbols::DeclarationTable;
use crate::models::language::Language;

/// Which export syntax to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStyle {
    /// `module.exports = …`
    ModuleExports,
    /// `export = …` or `export default …`
    ExportStatement,
}

impl ExportStyle {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Js => ExportStyle::ModuleExports,
            Language::Ts | Language::Tsx => ExportStyle::ExportStatement,
        }
    }
}

/// Result of looking for the export literal
#[derive(Debug, Clone, Copy)]
pub enum ExportSearch<'s, 'a> {
    /// Exactly one export resolved to an object literal
    Definitive(&'s ObjectExpression<'a>),
    /// None, or more than one; `candidates` counts the resolvable ones
    NotDefinitive { candidates: usize },
}

impl<'s, 'a> ExportSearch<'s, 'a> {
    pub fn literal(self) -> Option<&'s ObjectExpression<'a>> {
        match self {
            ExportSearch::Definitive(obj) => Some(obj),
            ExportSearch::NotDefinitive { .. } => None,
        }
    }
}

/// Scan top-level statements for the export literal
pub fn find_export_literal<'s, 'a>(
    program: &'s Program<'a>,
    style: ExportStyle,
    symbols: Option<&DeclarationTable<'s, 'a>>,
) -> ExportSearch<'s, 'a> {
    let literals: Vec<&'s ObjectExpression<'a>> = program
        .body
        .iter()
        .filter_map(|stmt| exported_expression(stmt, style))
        .filter_map(|expr| resolve_object_literal(expr, symbols))
        .collect();

    match literals.as_slice() {
        [single] => ExportSearch::Definitive(single),
        _ => {
            tracing::debug!(candidates = literals.len(), ?style, "no definitive export literal");
            ExportSearch::NotDefinitive {
                candidates: literals.len(),
            }
        }
    }
}

/// Right-hand side of a statement matching the export style
fn exported_expression<'s, 'a>(stmt: &'s Statement<'a>, style: ExportStyle) -> Option<&'s Expression<'a>> {
    match (style, stmt) {
        (ExportStyle::ModuleExports, Statement::ExpressionStatement(expr_stmt)) => {
            match peel(&expr_stmt.expression) {
                Expression::AssignmentExpression(assign) if is_module_exports_assignment(assign) => {
                    Some(&assign.right)
                }
                _ => None,
            }
        }
        (ExportStyle::ExportStatement, Statement::TSExportAssignment(export)) => Some(&export.expression),
        (ExportStyle::ExportStatement, Statement::ExportDefaultDeclaration(export)) => {
            export.declaration.as_expression()
        }
        _ => None,
    }
}

/// `module.exports = …`, plain assignment only
fn is_module_exports_assignment(assign: &AssignmentExpression<'_>) -> bool {
    if assign.operator != AssignmentOperator::Assign {
        return false;
    }
    match &assign.left {
        AssignmentTarget::StaticMemberExpression(member) => {
            member.property.name == "exports"
                && matches!(&member.object, Expression::Identifier(ident) if ident.name == "module")
        }
        _ => false,
    }
}
