use crate::output::GroupPlan;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render planned renames as a table
pub fn render_table(groups: &[GroupPlan], use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Kind").fg(Color::Cyan),
            Cell::new("Current").fg(Color::Cyan),
            Cell::new("New").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Kind", "Current", "New"]);
    }

    let mut total = 0;
    for group in groups {
        for rename in &group.plan {
            total += 1;
            let kind = rename.kind.to_string();
            if use_color {
                table.add_row(vec![
                    Cell::new(kind).fg(Color::Blue),
                    Cell::new(&rename.from),
                    Cell::new(format!("→ {}", rename.to)).fg(Color::Magenta),
                ]);
            } else {
                table.add_row(vec![kind, rename.from.clone(), format!("→ {}", rename.to)]);
            }
        }
    }

    if use_color {
        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(format!("{total} renames")).fg(Color::Yellow),
            Cell::new(""),
        ]);
    } else {
        table.add_row(vec!["TOTAL".to_string(), format!("{total} renames"), String::new()]);
    }

    table.to_string()
}
