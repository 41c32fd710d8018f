//! The aggregated schema: source layer name to required field names.

use core::fmt::{self, Display};
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::trace;

use crate::field::FieldName;

/// Fields required from one source layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Layer {
    fields: BTreeSet<FieldName>,
}

impl Layer {
    /// Field names in lexicographic order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Deduplicated fields per source layer. Reserved `$` names are never stored,
/// and a layer exists only once it holds a field.
///
/// Layers and fields are kept in sorted containers, so rendering does not
/// depend on the order the document listed them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    layers: BTreeMap<String, Layer>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, layer_name: &str, field: FieldName) {
        if field.is_reserved() {
            trace!("Ignoring reserved field {field} of layer {layer_name}");
            return;
        }
        self.layers
            .entry(layer_name.to_string())
            .or_default()
            .fields
            .insert(field);
    }

    /// Layers in name order.
    pub fn layers(&self) -> impl Iterator<Item = (&str, &Layer)> {
        self.layers.iter().map(|(name, layer)| (name.as_str(), layer))
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, layer)) in self.layers().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{name}")?;
            writeln!(f, "{}", "-".repeat(name.chars().count().max(10)))?;
            for field in layer.fields() {
                writeln!(f, "  {field}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldName {
        FieldName::new(name).unwrap()
    }

    #[test]
    fn test_add_field_deduplicates() {
        let mut schema = Schema::new();
        schema.add_field("roads", field("class"));
        schema.add_field("roads", field("class"));
        schema.add_field("roads", field("name"));
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.layer("roads").unwrap().len(), 2);
    }

    #[test]
    fn test_reserved_fields_are_ignored() {
        let mut schema = Schema::new();
        schema.add_field("poi", field("$type"));
        assert!(schema.layer("poi").is_none());
        schema.add_field("poi", field("name"));
        assert!(!schema.layer("poi").unwrap().contains("$type"));
    }

    #[test]
    fn test_render_is_sorted() {
        let mut schema = Schema::new();
        schema.add_field("water", field("kind"));
        schema.add_field("roads", field("name"));
        schema.add_field("roads", field("class"));

        let expected = "\
roads
----------
  class
  name

water
----------
  kind
";
        assert_eq!(schema.to_string(), expected);
    }

    #[test]
    fn test_render_empty_schema() {
        assert_eq!(Schema::new().to_string(), "");
    }

    #[test]
    fn test_render_long_layer_name() {
        let mut schema = Schema::new();
        schema.add_field("building_outlines", field("height"));
        assert_eq!(
            schema.to_string(),
            "building_outlines\n-----------------\n  height\n"
        );
    }

    #[test]
    fn test_serialize() {
        let mut schema = Schema::new();
        schema.add_field("roads", field("name"));
        schema.add_field("roads", field("class"));
        schema.add_field("water", field("$id"));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            serde_json::json!({"roads": ["class", "name"]})
        );
    }
}
