mod summary;
mod table;

pub use summary::render_summary;
pub use table::render_table;

use crate::output::GroupPlan;
use anyhow::Result;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    None,
}

/// An explicit `Some` choice wins; otherwise ask `is_terminal`.
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color, // Honor explicit color request
        None => is_terminal(),                  // Auto-detect only when not specified
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the planned renames in the specified format
pub fn render_plan(groups: &[GroupPlan], format: Preview, use_color: Option<bool>) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(groups, use_color),
        Preview::Summary => render_summary(groups, use_color),
        Preview::None => String::new(),
    }
}

/// Write plan preview to stdout
pub fn write_preview(groups: &[GroupPlan], format: Preview, use_color: Option<bool>) -> Result<()> {
    let output = render_plan(groups, format, use_color);
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
