//! `{name}` template tokens in layout properties.

use regex::Regex;
use serde_json::{Map, Value as JsonValue};

use crate::field::FieldName;

static TOKEN_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Yield the first `{identifier}` token of every string-valued property.
///
/// Only the first token of each string is reported, so `"{ref} {name}"`
/// contributes `ref`. Non-string values are skipped.
pub fn find_tokens(properties: &Map<String, JsonValue>) -> impl Iterator<Item = FieldName> + '_ {
    properties
        .values()
        .filter_map(JsonValue::as_str)
        .filter_map(first_token)
}

fn first_token(template: &str) -> Option<FieldName> {
    let captures = TOKEN_PATTERN.captures(template)?;
    FieldName::new(captures.get(1)?.as_str()).ok()
}
