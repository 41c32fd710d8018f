use std::path::Path;

/// Syntax of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Pick by file extension, falling back to JSON
    #[default]
    Auto,
    Json,
    Yaml,
}

impl InputFormat {
    /// Resolve `Auto` against the path the document was read from.
    pub fn resolve(self, path: Option<&Path>) -> InputFormat {
        match self {
            InputFormat::Auto => match path
                .and_then(|p| p.extension())
                .and_then(|ext| ext.to_str())
            {
                Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                    InputFormat::Yaml
                }
                _ => InputFormat::Json,
            },
            other => other,
        }
    }
}

/// Configuration for schema extraction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub format: InputFormat,
}
