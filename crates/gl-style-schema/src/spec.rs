//! Input dialects and the dispatcher that turns a document into a [`Schema`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

use crate::Result;
use crate::error::Error;
use crate::field::FieldName;
use crate::layer::collect_layer_fields;
use crate::schema::Schema;

/// A recognized input document.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Style(StyleSpec),
    TileJson(TileJsonSpec),
}

/// A style document: rendering layers that draw from source layers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleSpec {
    pub layers: Vec<StyleLayer>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StyleLayer {
    /// Only used in diagnostics, so any value is accepted
    #[serde(default)]
    pub id: Option<JsonValue>,
    /// Absent for layers that draw no tile data, such as backgrounds
    #[serde(default, rename = "source-layer")]
    pub source_layer: Option<String>,
    #[serde(default)]
    pub filter: JsonValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Map<String, JsonValue>,
}

/// TileJSON metadata declaring the fields of each vector layer directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileJsonSpec {
    pub vector_layers: Vec<VectorLayer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VectorLayer {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Map<String, JsonValue>,
}

impl Spec {
    /// Decide which dialect a document is written in.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        let JsonValue::Object(doc) = &value else {
            return Err(Error::UnrecognizedFormat);
        };

        if doc.get("tilejson").is_some_and(is_truthy) && doc.contains_key("vector_layers") {
            debug!("Detected TileJSON metadata");
            Ok(Spec::TileJson(deserialize_dialect("TileJSON", value)?))
        } else if doc.contains_key("layers") {
            debug!("Detected style document");
            Ok(Spec::Style(deserialize_dialect("style", value)?))
        } else {
            Err(Error::UnrecognizedFormat)
        }
    }

    /// Aggregate the fields of every source layer. Layers that contribute
    /// no usable field are left out.
    pub fn schema(&self) -> Schema {
        let mut schema = Schema::new();
        match self {
            Spec::Style(style) => {
                for layer in &style.layers {
                    let Some(source) = &layer.source_layer else {
                        match &layer.id {
                            Some(id) => trace!("Skipping layer {id} without source-layer"),
                            None => trace!("Skipping unnamed layer without source-layer"),
                        }
                        continue;
                    };
                    for field in collect_layer_fields(layer) {
                        schema.add_field(source, field);
                    }
                }
            }
            Spec::TileJson(tilejson) => {
                for layer in &tilejson.vector_layers {
                    for key in layer.fields.keys() {
                        match FieldName::new(key.as_str()) {
                            Ok(field) => schema.add_field(&layer.id, field),
                            Err(e) => debug!("Dropping field of layer {}: {e}", layer.id),
                        }
                    }
                }
            }
        }
        debug!("Schema has {} layers", schema.len());
        schema
    }
}

/// Build the schema of a parsed document.
pub fn parse(value: JsonValue) -> Result<Schema> {
    Ok(Spec::from_value(value)?.schema())
}

fn deserialize_dialect<T: DeserializeOwned>(
    dialect: &'static str,
    value: JsonValue,
) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::InvalidStructure {
        dialect,
        message: e.to_string(),
    })
}

/// Read an explicit `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detects_style() {
        let spec = Spec::from_value(json!({"version": 8, "layers": []})).unwrap();
        assert_eq!(spec, Spec::Style(StyleSpec { layers: vec![] }));
    }

    #[test]
    fn test_detects_tilejson() {
        let spec = Spec::from_value(json!({
            "tilejson": "2.1.0",
            "vector_layers": [{"id": "water", "fields": {"area": "Number"}}]
        }))
        .unwrap();
        let Spec::TileJson(tilejson) = spec else {
            panic!("Expected TileJSON");
        };
        assert_eq!(tilejson.vector_layers[0].id, "water");
    }

    #[test]
    fn test_falsy_tilejson_marker_falls_back_to_style() {
        let spec = Spec::from_value(json!({
            "tilejson": "",
            "vector_layers": [],
            "layers": []
        }))
        .unwrap();
        assert!(matches!(spec, Spec::Style(_)));
    }

    #[test]
    fn test_vector_layers_without_marker_is_unrecognized() {
        let err = Spec::from_value(json!({"vector_layers": []})).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedFormat));
    }

    #[test]
    fn test_unrecognized_documents() {
        for doc in [json!({"sources": {}}), json!([]), json!("layers"), json!(null)] {
            let err = Spec::from_value(doc).unwrap_err();
            assert!(matches!(err, Error::UnrecognizedFormat));
        }
    }

    #[test]
    fn test_invalid_structure() {
        let err = Spec::from_value(json!({"layers": {"a": 1}})).unwrap_err();
        assert!(matches!(err, Error::InvalidStructure { dialect: "style", .. }));

        let err = Spec::from_value(json!({"layers": [{"source-layer": 5}]})).unwrap_err();
        assert!(matches!(err, Error::InvalidStructure { dialect: "style", .. }));

        let err = Spec::from_value(json!({"tilejson": "3.0.0", "vector_layers": [{}]}))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidStructure { dialect: "TileJSON", .. }));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!("2.1.0")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(3)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
    }

    #[test]
    fn test_layers_without_source_are_skipped() {
        let schema = parse(json!({
            "layers": [
                {"id": "background", "type": "background", "filter": ["has", "kind"]},
                {"id": "water", "source-layer": "water", "filter": ["has", "kind"]}
            ]
        }))
        .unwrap();
        assert_eq!(schema.len(), 1);
        assert!(schema.layer("water").unwrap().contains("kind"));
        assert!(schema.layer("").is_none());
    }

    #[test]
    fn test_layers_without_usable_fields_are_absent() {
        let schema = parse(json!({
            "layers": [
                {"source-layer": "water"},
                {"source-layer": "poi", "filter": ["==", "$type", "Point"]},
                {"source-layer": "roads", "layout": {"text-field": "{name}"}}
            ]
        }))
        .unwrap();
        assert_eq!(schema.layers().map(|(name, _)| name).collect::<Vec<_>>(), vec!["roads"]);
        assert_eq!(schema.to_string(), "roads\n----------\n  name\n");

        let schema = parse(json!({
            "tilejson": "2.1.0",
            "vector_layers": [{"id": "a", "fields": {"$id": "x"}}]
        }))
        .unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.to_string(), "");
    }

    #[test]
    fn test_non_string_layer_id_is_accepted() {
        let schema = parse(json!({
            "layers": [
                {"id": 7, "source-layer": "roads", "filter": ["has", "class"]},
                {"id": 8, "type": "background"}
            ]
        }))
        .unwrap();
        let roads: Vec<&str> = schema.layer("roads").unwrap().fields().map(|f| f.as_str()).collect();
        assert_eq!(roads, vec!["class"]);
    }

    #[test]
    fn test_null_layout_and_fields_read_as_absent() {
        let schema = parse(json!({
            "layers": [{"source-layer": "roads", "filter": ["has", "class"], "layout": null}]
        }))
        .unwrap();
        assert!(schema.layer("roads").unwrap().contains("class"));

        let schema = parse(json!({
            "tilejson": "2.1.0",
            "vector_layers": [{"id": "water", "fields": null}]
        }))
        .unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_tilejson_without_fields() {
        let schema = parse(json!({
            "tilejson": "2.1.0",
            "vector_layers": [{"id": "landuse"}, {"id": "poi", "fields": {"$id": "", "name": ""}}]
        }))
        .unwrap();
        assert!(schema.layer("landuse").is_none());
        let poi: Vec<&str> = schema.layer("poi").unwrap().fields().map(|f| f.as_str()).collect();
        assert_eq!(poi, vec!["name"]);
    }
}
