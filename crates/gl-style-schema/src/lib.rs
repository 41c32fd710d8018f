#![doc = include_str!("../README.md")]

mod config;
mod error;
pub mod field;
pub mod filter;
mod input;
pub mod layer;
pub mod schema;
pub mod spec;
pub mod token;

pub use config::{Config, InputFormat};
pub use error::Error;
pub use field::{FieldName, FieldNameError};
pub use filter::extract_filter_fields;
pub use input::{extract_schema, parse_document};
pub use layer::collect_layer_fields;
pub use schema::{Layer, Schema};
pub use spec::{Spec, StyleLayer, StyleSpec, TileJsonSpec, VectorLayer, parse};
pub use token::find_tokens;


/// Result type for gl-style-schema operations
pub type Result<T> = std::result::Result<T, Error>;
