use crate::field::FieldName;
use crate::filter::extract_filter_fields;
use crate::spec::StyleLayer;
use crate::token::find_tokens;

/// Collect every non-reserved field a style layer references, filter fields
/// first, then layout tokens. Duplicates are kept; the schema merges them.
pub fn collect_layer_fields(layer: &StyleLayer) -> Vec<FieldName> {
    extract_filter_fields(&layer.filter)
        .chain(find_tokens(&layer.layout))
        .filter(|field| !field.is_reserved())
        .collect()
}
