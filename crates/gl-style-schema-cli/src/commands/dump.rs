use std::path::Path;

use anyhow::Context;
use gl_style_schema::{Config, extract_schema};
use tracing::debug;

use crate::util::{FormatArg, OutputFormat, display_path, read_input};

#[derive(clap::Args)]
pub struct Args {
    /// Path to style or TileJSON file (use - or omit for stdin)
    pub file: Option<String>,
    /// Input format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub format: FormatArg,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let file = args.file.as_deref();
    let contents = read_input(file)?;

    let config = Config {
        format: args.format.into(),
    };
    let path = file.filter(|f| *f != "-").map(Path::new);
    debug!("Reading schema from {}", display_path(file));

    let schema = extract_schema(&contents, &config, path)
        .with_context(|| format!("Failed to extract schema from {}", display_path(file)))?;

    match args.output {
        OutputFormat::Text => print!("{schema}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schema).context("Error serializing JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}
