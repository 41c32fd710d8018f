use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use clap::ValueEnum;
use gl_style_schema::InputFormat;

/// Read input from file path or stdin.
/// - `None` or `Some("-")` reads from stdin
/// - `Some(path)` reads from file
pub fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Error reading from stdin")?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Error reading {path}")),
    }
}

/// Helper to get display path for error messages
pub fn display_path(file: Option<&str>) -> &str {
    match file {
        None | Some("-") => "<stdin>",
        Some(path) => path,
    }
}

/// Input document syntax
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// By file extension; JSON for stdin
    #[default]
    Auto,
    Json,
    Yaml,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::Json => InputFormat::Json,
            FormatArg::Yaml => InputFormat::Yaml,
        }
    }
}

/// Report layout
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// Layer headings followed by indented field names
    #[default]
    Text,
    /// Object mapping layer names to sorted field arrays
    Json,
}
