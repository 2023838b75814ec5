use crate::entry::RenamePlan;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for applying a rename plan
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Append a line per rename to this file
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRename {
    pub from: PathBuf,
    pub to: PathBuf,
    pub error: String,
}

/// Outcome of applying a plan. Each rename succeeds or fails on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    pub renamed: Vec<AppliedRename>,
    pub failed: Vec<FailedRename>,
}

impl ApplyReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

struct ApplyLog {
    file: Option<File>,
}

impl ApplyLog {
    fn open(path: Option<&Path>) -> Result<Self> {
        let file = if let Some(path) = path {
            // Create parent directory if it doesn't exist
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open apply log {}", path.display()))?,
            )
        } else {
            None
        };
        Ok(Self { file })
    }

    fn log(&mut self, message: &str) {
        if let Some(ref mut file) = self.file {
            let written = writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )
            .and_then(|()| file.flush());
            if let Err(e) = written {
                log::warn!("failed to write apply log: {e}");
            }
        }
    }
}

struct Pending {
    from: PathBuf,
    staged: PathBuf,
    to: PathBuf,
}

/// Rename every entry of `plan` on disk.
///
/// Renames run in two phases: every source is first moved to a temporary
/// name next to it, then to its final name. That way a target that is the
/// current name of another renamed entry is free by the time it is needed.
/// A target already taken by an entry outside the plan is never overwritten.
pub fn apply_plan(plan: &RenamePlan<PathBuf>, options: &ApplyOptions) -> Result<ApplyReport> {
    let mut log = ApplyLog::open(options.log_file.as_deref())?;
    let mut report = ApplyReport::default();

    let sources: HashSet<&Path> = plan.iter().map(|r| r.id.as_path()).collect();
    let mut pending = Vec::with_capacity(plan.len());

    for (position, rename) in plan.iter().enumerate() {
        let from = rename.id.clone();
        let parent = from.parent().map(Path::to_path_buf).unwrap_or_default();
        let to = parent.join(&rename.to);

        if to.symlink_metadata().is_ok() && !sources.contains(to.as_path()) {
            fail(&mut report, &mut log, from, to, "target already exists".to_string());
            continue;
        }

        let staged = parent.join(format!(
            ".fileorder-{}-{}-{}",
            std::process::id(),
            position,
            rename.from
        ));
        match fs::rename(&from, &staged) {
            Ok(()) => pending.push(Pending { from, staged, to }),
            Err(e) => fail(&mut report, &mut log, from, to, e.to_string()),
        }
    }

    for Pending { from, staged, to } in pending {
        if to.symlink_metadata().is_ok() {
            restore(&staged, &from);
            fail(&mut report, &mut log, from, to, "target already exists".to_string());
            continue;
        }
        match fs::rename(&staged, &to) {
            Ok(()) => {
                log.log(&format!("renamed {} -> {}", from.display(), to.display()));
                report.renamed.push(AppliedRename { from, to });
            },
            Err(e) => {
                restore(&staged, &from);
                fail(&mut report, &mut log, from, to, e.to_string());
            },
        }
    }

    log::info!(
        "applied {} renames, {} failed",
        report.renamed.len(),
        report.failed.len()
    );
    Ok(report)
}

fn restore(staged: &Path, original: &Path) {
    if let Err(e) = fs::rename(staged, original) {
        log::warn!(
            "could not move {} back to {}: {e}",
            staged.display(),
            original.display()
        );
    }
}

fn fail(report: &mut ApplyReport, log: &mut ApplyLog, from: PathBuf, to: PathBuf, error: String) {
    log::warn!("rename {} -> {} failed: {error}", from.display(), to.display());
    log.log(&format!(
        "FAILED {} -> {}: {error}",
        from.display(),
        to.display()
    ));
    report.failed.push(FailedRename { from, to, error });
}
