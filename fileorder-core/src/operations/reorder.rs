use super::{finish, load_groups, resolve_original};
use crate::config::Config;
use crate::convention::ConventionOverrides;
use crate::entry::EntryKind;
use crate::error::PlanError;
use crate::output::{GroupPlan, PlanResult};
use crate::planner::{arrange, compute_rename_plan, move_entry};
use anyhow::Result;
use std::path::Path;

/// A new order for one group of siblings
#[derive(Debug, Clone)]
pub struct ReorderRequest {
    pub kind: EntryKind,
    /// Names to put first, in this order; the rest keep their current order
    pub leading: Vec<String>,
    /// `(name, position)` moves applied after `leading`, in sequence
    pub moves: Vec<(String, usize)>,
    pub overrides: ConventionOverrides,
    pub dry_run: bool,
}

impl ReorderRequest {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            leading: Vec::new(),
            moves: Vec::new(),
            overrides: ConventionOverrides::default(),
            dry_run: false,
        }
    }
}

/// Reorder operation - numbers one group in the requested order
pub fn reorder_operation(
    dir: &Path,
    config: &Config,
    request: &ReorderRequest,
) -> Result<PlanResult> {
    let siblings = load_groups(dir, config)?;
    let entries = siblings.group(request.kind);
    let names = siblings.names(request.kind);

    let convention = resolve_original(&names, config);
    let target = convention.with_overrides(&request.overrides);
    log::info!(
        "reordering {} {}s: {} -> {}",
        entries.len(),
        request.kind,
        convention,
        target
    );

    let mut desired = arrange(entries, &request.leading)?;
    for (name, position) in &request.moves {
        let from = desired
            .iter()
            .position(|e| &e.name == name)
            .ok_or_else(|| PlanError::UnknownEntry(name.clone()))?;
        move_entry(&mut desired, from, *position)?;
    }

    let plan = compute_rename_plan(entries, &desired, &convention, &target)?;
    let group = GroupPlan {
        kind: request.kind,
        convention,
        target,
        plan,
    };
    finish("reorder", siblings.dir, vec![group], request.dry_run, config)
}
