use std::path::Path;

use serde_json::Value as JsonValue;

use crate::config::{Config, InputFormat};
use crate::Result;
use crate::schema::Schema;
use crate::spec;

/// Decode a document into a generic value tree.
///
/// `format` must already be resolved; `Auto` is read as JSON.
pub fn parse_document(text: &str, format: InputFormat) -> Result<JsonValue> {
    match format {
        InputFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        InputFormat::Json | InputFormat::Auto => Ok(serde_json::from_str(text)?),
    }
}

/// Decode `text` and build its schema. `path` is only used to resolve
/// [`InputFormat::Auto`].
pub fn extract_schema(text: &str, config: &Config, path: Option<&Path>) -> Result<Schema> {
    let format = config.format.resolve(path);
    let document = parse_document(text, format)?;
    spec::parse(document)
}
