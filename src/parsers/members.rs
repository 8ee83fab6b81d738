//! Member scan over the export literal
//!
//! One linear pass classifies every member and records the first match
//! for the `component` role and the first match for the `props` role.
//! A method member fills the component role whatever its key.

use oxc_ast::ast::*;
use oxc_span::{GetSpan, Span};

use super::resolve::{peel, property_key_name};
use super::symbols::{Binding, DeclarationTable, Lookup};
use crate::models::extraction::ComponentSource;

pub const COMPONENT_KEY: &str = "component";
pub const PROPS_KEY: &str = "props";

/// Shape of one member of an object literal
#[derive(Debug, Clone, Copy)]
pub enum MemberShape<'s, 'a> {
    /// `name: <expr>` where the value is not a bare identifier
    InlineValue { name: &'s str, value: &'s Expression<'a> },
    /// `name: ident`
    Reference { name: &'s str, ident: &'s IdentifierReference<'a> },
    /// `name` with the value elided
    Shorthand { name: &'s str, ident: &'s IdentifierReference<'a> },
    /// `name() { … }`
    Method { name: &'s str, span: Span },
    /// Spread, accessors, computed keys
    Ignored,
}

impl<'s, 'a> MemberShape<'s, 'a> {
    pub fn classify(member: &'s ObjectPropertyKind<'a>) -> Self {
        let ObjectPropertyKind::ObjectProperty(prop) = member else {
            return MemberShape::Ignored;
        };
        if !matches!(prop.kind, PropertyKind::Init) {
            return MemberShape::Ignored;
        }
        let Some(name) = property_key_name(prop) else {
            return MemberShape::Ignored;
        };

        if prop.method {
            return MemberShape::Method { name, span: prop.span };
        }

        match peel(&prop.value) {
            Expression::Identifier(ident) if prop.shorthand => MemberShape::Shorthand { name, ident },
            Expression::Identifier(ident) => MemberShape::Reference { name, ident },
            value => MemberShape::InlineValue { name, value },
        }
    }

    pub fn name(&self) -> Option<&'s str> {
        match self {
            MemberShape::InlineValue { name, .. }
            | MemberShape::Reference { name, .. }
            | MemberShape::Shorthand { name, .. }
            | MemberShape::Method { name, .. } => Some(name),
            MemberShape::Ignored => None,
        }
    }
}

/// Where the component text lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMatch {
    pub span: Span,
    pub source: ComponentSource,
}

/// The `props` member, before conversion to text
#[derive(Debug, Clone, Copy)]
pub enum PropsMatch<'s, 'a> {
    Expression(&'s Expression<'a>),
    /// The member names an identifier one hop cannot read
    Unresolved,
}

/// A `component` reference that did not reach a definition
#[derive(Debug, Clone, Copy)]
pub struct UnresolvedComponent<'s, 'a> {
    pub name: &'s str,
    pub binding: Option<Binding<'s, 'a>>,
}

/// Accumulated result of one pass
#[derive(Debug, Default)]
pub struct MemberScan<'s, 'a> {
    pub component: Option<ComponentMatch>,
    pub props: Option<PropsMatch<'s, 'a>>,
    /// References named `component` that were seen but not resolved
    pub unresolved_components: Vec<UnresolvedComponent<'s, 'a>>,
}

impl<'s, 'a> MemberScan<'s, 'a> {
    fn done(&self) -> bool {
        self.component.is_some() && self.props.is_some()
    }
}

/// Scan the export literal's members once, first match wins per role
pub fn scan_members<'s, 'a>(
    literal: &'s ObjectExpression<'a>,
    symbols: Option<&DeclarationTable<'s, 'a>>,
) -> MemberScan<'s, 'a> {
    let mut scan = MemberScan::default();

    for member in &literal.properties {
        let shape = MemberShape::classify(member);
        match (shape, shape.name()) {
            (MemberShape::Method { .. }, _) => {
                if scan.component.is_none() {
                    scan.component = match_component(shape, symbols, &mut scan.unresolved_components);
                }
            }
            (_, Some(COMPONENT_KEY)) if scan.component.is_none() => {
                scan.component = match_component(shape, symbols, &mut scan.unresolved_components);
            }
            (_, Some(PROPS_KEY)) if scan.props.is_none() => {
                scan.props = match_props(shape, symbols);
            }
            _ => {}
        }

        if scan.done() {
            break;
        }
    }

    scan
}

fn match_component<'s, 'a>(
    shape: MemberShape<'s, 'a>,
    symbols: Option<&DeclarationTable<'s, 'a>>,
    unresolved: &mut Vec<UnresolvedComponent<'s, 'a>>,
) -> Option<ComponentMatch> {
    match shape {
        MemberShape::InlineValue { value, .. } => component_span(value).map(|span| ComponentMatch {
            span,
            source: ComponentSource::Inline,
        }),
        MemberShape::Reference { ident, .. } | MemberShape::Shorthand { ident, .. } => {
            let name = ident.name.as_str();
            let lookup = symbols.map(|table| table.lookup(name)).unwrap_or(Lookup::Undeclared);
            match lookup {
                Lookup::Initializer(init) => {
                    let span = component_span(peel(init));
                    if span.is_none() {
                        tracing::debug!(name, "component reference is not a function, arrow or class");
                    }
                    span.map(|span| ComponentMatch {
                        span,
                        source: ComponentSource::Declaration,
                    })
                }
                Lookup::NoInitializer(binding) => {
                    unresolved.push(UnresolvedComponent {
                        name,
                        binding: Some(binding),
                    });
                    None
                }
                Lookup::Undeclared => {
                    unresolved.push(UnresolvedComponent { name, binding: None });
                    None
                }
            }
        }
        MemberShape::Method { span, .. } => Some(ComponentMatch {
            span,
            source: ComponentSource::Method,
        }),
        MemberShape::Ignored => None,
    }
}

fn match_props<'s, 'a>(
    shape: MemberShape<'s, 'a>,
    symbols: Option<&DeclarationTable<'s, 'a>>,
) -> Option<PropsMatch<'s, 'a>> {
    match shape {
        MemberShape::InlineValue { value, .. } => Some(PropsMatch::Expression(value)),
        MemberShape::Reference { ident, .. } | MemberShape::Shorthand { ident, .. } => {
            let resolved = symbols.and_then(|table| table.lookup(ident.name.as_str()).initializer());
            Some(match resolved {
                Some(init) => PropsMatch::Expression(peel(init)),
                None => {
                    tracing::debug!(name = %ident.name, "props reference could not be resolved");
                    PropsMatch::Unresolved
                }
            })
        }
        MemberShape::Method { .. } | MemberShape::Ignored => None,
    }
}

/// Span of a function, arrow or class expression
fn component_span(expr: &Expression<'_>) -> Option<Span> {
    match expr {
        Expression::FunctionExpression(_)
        | Expression::ArrowFunctionExpression(_)
        | Expression::ClassExpression(_) => Some(expr.span()),
        _ => None,
    }
}
