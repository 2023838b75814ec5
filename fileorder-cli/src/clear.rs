use anyhow::Result;
use fileorder_core::{clear_operation, Config, Preview, ALL_GROUPS};
use std::path::Path;

use crate::cli::GroupArgs;
use crate::report::print_plan_result;
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn handle_clear(
    dir: &Path,
    config: &Config,
    group: &GroupArgs,
    dry_run: bool,
    preview: Preview,
    use_color: Option<bool>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let kinds = group.kinds(&ALL_GROUPS);
    let result = clear_operation(dir, config, &kinds, dry_run)?;
    print_plan_result(&result, preview, use_color, output, quiet)
}
