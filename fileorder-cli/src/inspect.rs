use anyhow::Result;
use fileorder_core::{inspect_operation, Config, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_inspect(dir: &Path, config: &Config, output: OutputFormat) -> Result<()> {
    let result = inspect_operation(dir, config)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => print!("{}", result.format_summary()),
    }

    Ok(())
}
