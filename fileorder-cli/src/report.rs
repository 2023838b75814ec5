use anyhow::{bail, Result};
use fileorder_core::{write_preview, OutputFormatter, PlanResult, Preview};

use crate::OutputFormat;

/// Print a plan result the way every renaming command does: preview first,
/// then the summary, or JSON only.
pub fn print_plan_result(
    result: &PlanResult,
    preview: Preview,
    use_color: Option<bool>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet && result.renames() > 0 {
                write_preview(&result.groups, preview, use_color)?;
            }
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    let failures = result.failures();
    if failures > 0 {
        bail!("{} of {} renames failed", failures, result.renames());
    }
    Ok(())
}
