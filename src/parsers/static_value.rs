//! Static reading of literal option values into JSON

use oxc_ast::ast::*;
use oxc_syntax::operator::UnaryOperator;
use serde_json::{Map, Number, Value};

use super::resolve::{peel, property_key_name, resolve_one_hop};
use super::symbols::DeclarationTable;

/// Read `expr` as a JSON value without evaluating anything.
///
/// Identifiers are followed one hop; identifiers inside the resolved
/// initializer are not followed again. Object members that are not
/// static are skipped, array elements that are not static become `null`.
pub fn static_value<'s, 'a>(expr: &'s Expression<'a>, symbols: Option<&DeclarationTable<'s, 'a>>) -> Option<Value> {
    match peel(expr) {
        Expression::Identifier(_) => {
            let resolved = resolve_one_hop(expr, symbols)?;
            static_value(resolved, None)
        }
        Expression::StringLiteral(lit) => Some(Value::String(lit.value.to_string())),
        Expression::BooleanLiteral(lit) => Some(Value::Bool(lit.value)),
        Expression::NullLiteral(_) => Some(Value::Null),
        Expression::NumericLiteral(lit) => number(lit.value),
        Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::UnaryNegation => {
            match peel(&unary.argument) {
                Expression::NumericLiteral(lit) => number(-lit.value),
                _ => None,
            }
        }
        Expression::TemplateLiteral(template) if template.expressions.is_empty() => template
            .quasis
            .first()
            .and_then(|quasi| quasi.value.cooked.as_ref())
            .map(|cooked| Value::String(cooked.to_string())),
        Expression::ArrayExpression(array) => Some(Value::Array(
            array
                .elements
                .iter()
                .map(|element| {
                    element
                        .as_expression()
                        .and_then(|expr| static_value(expr, symbols))
                        .unwrap_or(Value::Null)
                })
                .collect(),
        )),
        Expression::ObjectExpression(obj) => Some(static_object(obj, symbols)),
        _ => None,
    }
}

/// Static members of an object literal
pub fn static_object<'s, 'a>(obj: &'s ObjectExpression<'a>, symbols: Option<&DeclarationTable<'s, 'a>>) -> Value {
    let mut map = Map::new();
    for member in &obj.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = member else {
            continue;
        };
        if !matches!(prop.kind, PropertyKind::Init) || prop.method {
            continue;
        }
        let Some(key) = property_key_name(prop) else {
            continue;
        };
        if let Some(value) = static_value(&prop.value, symbols) {
            // later duplicates override earlier ones, as they would at runtime
            map.insert(key.to_string(), value);
        }
    }
    Value::Object(map)
}

fn number(value: f64) -> Option<Value> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Value::from(value as i64))
    } else {
        Number::from_f64(value).map(Value::Number)
    }
}
