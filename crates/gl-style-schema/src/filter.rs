//! Field extraction from legacy style filter expressions.
//!
//! A filter is an array whose first element names the operator, e.g.
//! `["==", "class", "motorway"]` or `["all", ["has", "name"], ["<", "rank", 5]]`.

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::field::FieldName;

/// Operator families that reference a field at operand position 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// `has`, `!has`
    Existential,
    /// `==`, `!=`, `>`, `>=`, `<`, `<=`
    Comparison,
    /// `in`, `!in`
    Membership,
    /// `all`, `any`, `none`
    Combining,
}

impl FilterKind {
    pub fn classify(operator: &str) -> Option<Self> {
        match operator {
            "has" | "!has" => Some(FilterKind::Existential),
            "==" | "!=" | ">" | ">=" | "<" | "<=" => Some(FilterKind::Comparison),
            "in" | "!in" => Some(FilterKind::Membership),
            "all" | "any" | "none" => Some(FilterKind::Combining),
            _ => None,
        }
    }
}

/// Yield the field names referenced by a filter expression.
///
/// Combining filters are walked one level only: each sub-expression
/// contributes its own operand at position 1, and a combinator nested inside
/// a combinator contributes nothing. Unknown operators and anything that is
/// not an array yield nothing.
pub fn extract_filter_fields(expr: &JsonValue) -> impl Iterator<Item = FieldName> + '_ {
    let items: &[JsonValue] = expr.as_array().map(Vec::as_slice).unwrap_or_default();
    let kind = items
        .first()
        .and_then(JsonValue::as_str)
        .and_then(FilterKind::classify);

    let none: &[JsonValue] = &[];
    let (operand, subexprs) = match kind {
        Some(FilterKind::Combining) => (None, &items[1..]),
        Some(_) => (items.get(1), none),
        None => (None, none),
    };

    operand
        .into_iter()
        .chain(
            subexprs
                .iter()
                .filter_map(|sub| sub.as_array().and_then(|sub| sub.get(1))),
        )
        .filter_map(operand_field)
}

fn operand_field(operand: &JsonValue) -> Option<FieldName> {
    match FieldName::from_value(operand) {
        Ok(name) => Some(name),
        Err(e) => {
            debug!("Dropping filter operand {operand}: {e}");
            None
        }
    }
}
