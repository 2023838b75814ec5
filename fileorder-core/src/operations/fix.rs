use super::{finish, load_groups, resolve_original, ALL_GROUPS};
use crate::config::Config;
use crate::entry::{PlannedRename, RenamePlan};
use crate::output::{GroupPlan, PlanResult};
use crate::planner::{find_outliers, suggest_fixes};
use anyhow::Result;
use std::path::Path;

/// Fix operation - appends entries without a prefix to the numbering of
/// their siblings
pub fn fix_operation(dir: &Path, config: &Config, dry_run: bool) -> Result<PlanResult> {
    let siblings = load_groups(dir, config)?;
    let mut groups = Vec::new();

    for kind in ALL_GROUPS {
        let entries = siblings.group(kind);
        let names = siblings.names(kind);
        let outliers = find_outliers(&names);
        let conforming: Vec<&str> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| !outliers.contains(i))
            .map(|(_, name)| *name)
            .collect();

        let mut plan = RenamePlan::default();
        for (position, fixed) in suggest_fixes(&names) {
            let entry = &entries[position];
            plan.renames.push(PlannedRename {
                id: entry.id.clone(),
                kind,
                from: entry.name.clone(),
                to: fixed,
            });
        }

        if plan.is_empty() {
            continue;
        }
        let convention = resolve_original(&conforming, config);
        groups.push(GroupPlan {
            kind,
            target: convention.clone(),
            convention,
            plan,
        });
    }

    finish("fix", siblings.dir, groups, dry_run, config)
}
