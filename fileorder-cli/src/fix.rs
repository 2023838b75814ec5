use anyhow::Result;
use fileorder_core::{fix_operation, Config, Preview};
use std::path::Path;

use crate::report::print_plan_result;
use crate::OutputFormat;

pub fn handle_fix(
    dir: &Path,
    config: &Config,
    dry_run: bool,
    preview: Preview,
    use_color: Option<bool>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = fix_operation(dir, config, dry_run)?;
    print_plan_result(&result, preview, use_color, output, quiet)
}
