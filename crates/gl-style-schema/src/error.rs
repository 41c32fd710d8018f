use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unrecognized spec format: expected a style with `layers` or TileJSON with `vector_layers`")]
    UnrecognizedFormat,

    #[error("Invalid {dialect} structure: {message}")]
    InvalidStructure {
        dialect: &'static str,
        message: String,
    },
}
