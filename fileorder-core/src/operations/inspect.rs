use super::{load_groups, ALL_GROUPS};
use crate::config::Config;
use crate::infer::infer_convention;
use crate::output::{GroupInspection, InspectResult, OutlierFix};
use crate::planner::{find_outliers, suggest_fixes};
use anyhow::Result;
use std::path::Path;

/// Inspect operation - reports the convention of each group and the
/// entries that break it
pub fn inspect_operation(dir: &Path, config: &Config) -> Result<InspectResult> {
    let siblings = load_groups(dir, config)?;

    let groups = ALL_GROUPS
        .iter()
        .map(|kind| {
            let names = siblings.names(*kind);
            let positions = find_outliers(&names);
            let fixes = suggest_fixes(&names);
            let outliers = positions
                .iter()
                .map(|position| OutlierFix {
                    name: names[*position].to_string(),
                    suggestion: fixes
                        .iter()
                        .find(|(p, _)| p == position)
                        .map(|(_, fixed)| fixed.clone()),
                })
                .collect();
            let conforming: Vec<&str> = names
                .iter()
                .enumerate()
                .filter(|(i, _)| !positions.contains(i))
                .map(|(_, name)| *name)
                .collect();

            GroupInspection {
                kind: *kind,
                entries: names.len(),
                convention: infer_convention(&conforming),
                outliers,
            }
        })
        .collect();

    Ok(InspectResult {
        dir: siblings.dir,
        groups,
    })
}
