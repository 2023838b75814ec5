use crate::output::GroupPlan;
use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;

/// Render planned renames as plain `current -> new` lines, one section per group
pub fn render_summary(groups: &[GroupPlan], use_color: bool) -> String {
    let mut output = String::new();

    for group in groups.iter().filter(|g| !g.plan.is_empty()) {
        let header = format!("[{}S] {}", group.kind.to_string().to_uppercase(), group.target);
        if use_color {
            writeln!(output, "{}", Style::new().bold().paint(header)).unwrap();
        } else {
            writeln!(output, "{header}").unwrap();
        }

        for rename in &group.plan {
            if use_color {
                writeln!(
                    output,
                    "{} -> {}",
                    AnsiColor::Red.paint(&rename.from),
                    AnsiColor::Green.paint(&rename.to)
                )
                .unwrap();
            } else {
                writeln!(output, "{} -> {}", rename.from, rename.to).unwrap();
            }
        }
    }

    output
}
