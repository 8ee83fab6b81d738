//! Props text conversion
//!
//! Turns the expression matched for the `props` role into source text:
//! one string for a single value, one string per element for an array.
//! Array elements may be `[props, options]` tuples.

use oxc_ast::ast::*;

use super::members::{PropsMatch, PROPS_KEY};
use super::resolve::{find_property, peel, resolve_object_literal, resolve_one_hop, span_text};
use super::static_value::static_value;
use super::symbols::DeclarationTable;
use crate::models::extraction::{PropsText, RawPropsEntry};

/// Converts props expressions of one file
pub struct PropsConverter<'t, 's, 'a> {
    source: &'t str,
    symbols: Option<&'t DeclarationTable<'s, 'a>>,
}

/// A props array element split into its halves
#[derive(Clone, Copy)]
enum Element<'s, 'a> {
    Plain(&'s Expression<'a>),
    Tuple {
        props: Option<&'s Expression<'a>>,
        options: Option<&'s Expression<'a>>,
    },
}

impl<'t, 's, 'a> PropsConverter<'t, 's, 'a> {
    pub fn new(source: &'t str, symbols: Option<&'t DeclarationTable<'s, 'a>>) -> Self {
        Self { source, symbols }
    }

    /// Text of each props object; `sub_property` selects a nested object
    pub fn to_text(&self, props: PropsMatch<'s, 'a>, sub_property: Option<&str>) -> PropsText {
        let expr = match props {
            PropsMatch::Expression(expr) => expr,
            PropsMatch::Unresolved => return PropsText::Single(None),
        };

        match peel(expr) {
            Expression::ArrayExpression(array) => PropsText::List(
                array
                    .elements
                    .iter()
                    .map(|element| {
                        let element = element.as_expression()?;
                        self.element_text(self.split(element), sub_property)
                    })
                    .collect(),
            ),
            other => PropsText::Single(self.object_text(other, sub_property)),
        }
    }

    /// Code, readme override and static options of every entry
    pub fn to_entries(&self, props: PropsMatch<'s, 'a>) -> Vec<RawPropsEntry> {
        let expr = match props {
            PropsMatch::Expression(expr) => expr,
            PropsMatch::Unresolved => return vec![RawPropsEntry::default()],
        };

        match peel(expr) {
            Expression::ArrayExpression(array) => array
                .elements
                .iter()
                .map(|element| match element.as_expression() {
                    Some(element) => self.entry(self.split(element)),
                    None => RawPropsEntry::default(),
                })
                .collect(),
            other => vec![RawPropsEntry {
                code: self.object_text(other, None),
                ..RawPropsEntry::default()
            }],
        }
    }

    fn entry(&self, element: Element<'s, 'a>) -> RawPropsEntry {
        let code = self.element_text(element, None);
        match element {
            Element::Plain(_) => RawPropsEntry {
                code,
                ..RawPropsEntry::default()
            },
            Element::Tuple { options, .. } => RawPropsEntry {
                code,
                readme_code: self.element_text(element, Some(PROPS_KEY)),
                options: options.and_then(|opts| static_value(opts, self.symbols)),
            },
        }
    }

    /// Classify an element, following one identifier hop to find tuples
    fn split(&self, element: &'s Expression<'a>) -> Element<'s, 'a> {
        match resolve_one_hop(element, self.symbols) {
            Some(Expression::ArrayExpression(tuple)) => {
                let mut halves = tuple.elements.iter().map(|half| half.as_expression());
                Element::Tuple {
                    props: halves.next().flatten(),
                    options: halves.next().flatten(),
                }
            }
            _ => Element::Plain(element),
        }
    }

    fn element_text(&self, element: Element<'s, 'a>, sub_property: Option<&str>) -> Option<String> {
        match (element, sub_property) {
            (Element::Plain(expr), _) => self.object_text(expr, sub_property),
            (Element::Tuple { props, .. }, None) => self.object_text(props?, None),
            (Element::Tuple { options, .. }, Some(name)) => self.object_text(options?, Some(name)),
        }
    }

    /// Text of the object literal `expr` resolves to, or of its
    /// `sub_property` when one is requested
    fn object_text(&self, expr: &'s Expression<'a>, sub_property: Option<&str>) -> Option<String> {
        let obj = resolve_object_literal(expr, self.symbols)?;
        let obj = match sub_property {
            None => obj,
            Some(name) => resolve_object_literal(&find_property(obj, name)?.value, self.symbols)?,
        };
        Some(span_text(self.source, obj.span).to_string())
    }
}
