//! Attribute field names referenced by a style.

use core::fmt::{self, Display};
use std::borrow::Borrow;

use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Prefix of feature properties that are computed by the renderer rather than
/// stored in tile data, such as `$type` and `$id`.
pub const RESERVED_PREFIX: char = '$';

/// A data attribute name. Always a non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldNameError {
    #[error("Empty field name")]
    Empty,
    #[error("Field name must be a string, got {0}")]
    NotAString(&'static str),
}

impl FieldName {
    pub fn new(name: impl Into<String>) -> Result<Self, FieldNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldNameError::Empty);
        }
        Ok(FieldName(name))
    }

    /// Validate a value found where a field name was expected.
    pub fn from_value(value: &JsonValue) -> Result<Self, FieldNameError> {
        match value {
            JsonValue::String(s) => FieldName::new(s.as_str()),
            other => Err(FieldNameError::NotAString(value_kind(other))),
        }
    }

    /// Whether this names a renderer-internal property.
    pub fn is_reserved(&self) -> bool {
        self.0.starts_with(RESERVED_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
