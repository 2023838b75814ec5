use anyhow::Result;
use fileorder_core::{reorder_operation, Config, EntryKind, Preview, ReorderRequest};
use std::path::Path;

use crate::cli::{ConventionArgs, GroupArgs, MoveArg};
use crate::report::print_plan_result;
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn handle_reorder(
    dir: &Path,
    config: &Config,
    group: &GroupArgs,
    order: Vec<String>,
    moves: Vec<MoveArg>,
    convention: ConventionArgs,
    dry_run: bool,
    preview: Preview,
    use_color: Option<bool>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    // Files unless --folders is given
    let kind = if group.folders {
        EntryKind::Folder
    } else {
        EntryKind::File
    };

    let mut request = ReorderRequest::new(kind);
    request.leading = order;
    // Positions are 1-based on the command line
    request.moves = moves
        .into_iter()
        .map(|m| (m.name, m.position - 1))
        .collect();
    request.overrides = convention.into();
    request.dry_run = dry_run;

    let result = reorder_operation(dir, config, &request)?;
    print_plan_result(&result, preview, use_color, output, quiet)
}
