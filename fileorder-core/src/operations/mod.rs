//! High-level operations that correspond to CLI commands
//!
//! Each operation scans one directory, plans renames per sibling group and,
//! unless it is a dry run, applies them. Argument parsing and output
//! formatting stay in the CLI.

pub mod clear;
pub mod fix;
pub mod inspect;
pub mod reorder;

pub use clear::clear_operation;
pub use fix::fix_operation;
pub use inspect::inspect_operation;
pub use reorder::{reorder_operation, ReorderRequest};

use crate::apply::{apply_plan, ApplyOptions};
use crate::config::Config;
use crate::convention::Convention;
use crate::entry::{EntryKind, RenamePlan};
use crate::infer::infer_convention;
use crate::output::{GroupPlan, PlanResult};
use crate::scanner::{scan_siblings, SiblingGroups};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Folders first, then files, as they are listed in a file explorer
pub const ALL_GROUPS: [EntryKind; 2] = [EntryKind::Folder, EntryKind::File];

pub(crate) fn load_groups(dir: &Path, config: &Config) -> Result<SiblingGroups> {
    let filter = config.sibling_filter()?;
    scan_siblings(dir, &filter)
}

/// The convention the names are in now: inferred, or the configured default
pub fn resolve_original<S: AsRef<str>>(names: &[S], config: &Config) -> Convention {
    infer_convention(names).unwrap_or_else(|| config.defaults.convention())
}

pub(crate) fn finish(
    operation: &str,
    dir: PathBuf,
    groups: Vec<GroupPlan>,
    dry_run: bool,
    config: &Config,
) -> Result<PlanResult> {
    let applied = if dry_run {
        None
    } else {
        let mut combined = RenamePlan::default();
        for group in &groups {
            combined.extend(group.plan.clone());
        }
        let options = ApplyOptions {
            log_file: config.apply_log.clone(),
        };
        Some(apply_plan(&combined, &options).context("Failed to apply renames")?)
    };

    Ok(PlanResult {
        operation: operation.to_string(),
        dir,
        dry_run,
        groups,
        applied,
    })
}
