use crate::apply::ApplyReport;
use crate::convention::Convention;
use crate::entry::{EntryKind, RenamePlan};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// What is known about one group of siblings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInspection {
    pub kind: EntryKind,
    pub entries: usize,
    /// Convention found in the current names, if any
    pub convention: Option<Convention>,
    pub outliers: Vec<OutlierFix>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierFix {
    pub name: String,
    pub suggestion: Option<String>,
}

/// Result of an inspect operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    pub dir: PathBuf,
    pub groups: Vec<GroupInspection>,
}

/// Renames computed for one group of siblings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupPlan {
    pub kind: EntryKind,
    /// Convention the current names were decoded with
    pub convention: Convention,
    /// Convention the new names follow
    pub target: Convention,
    pub plan: RenamePlan<PathBuf>,
}

/// Result of a reorder, fix or clear operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub operation: String,
    pub dir: PathBuf,
    pub dry_run: bool,
    pub groups: Vec<GroupPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<ApplyReport>,
}

impl PlanResult {
    pub fn renames(&self) -> usize {
        self.groups.iter().map(|g| g.plan.len()).sum()
    }

    pub fn failures(&self) -> usize {
        self.applied.as_ref().map_or(0, |report| report.failed.len())
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for InspectResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "inspect",
            "dir": self.dir,
            "groups": self.groups,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "Ordering of {}", self.dir.display()).unwrap();

        for group in &self.groups {
            writeln!(output, "{}s: {} entries", capitalize(group.kind), group.entries).unwrap();
            match &group.convention {
                Some(convention) => writeln!(output, "  Convention: {convention}").unwrap(),
                None => writeln!(output, "  Convention: none").unwrap(),
            }
            for outlier in &group.outliers {
                match &outlier.suggestion {
                    Some(suggestion) => {
                        writeln!(output, "  Outlier: {} -> {}", outlier.name, suggestion).unwrap();
                    },
                    None => writeln!(output, "  Outlier: {}", outlier.name).unwrap(),
                }
            }
        }

        output
    }
}

impl OutputFormatter for PlanResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.applied.as_ref().map_or(true, ApplyReport::is_success),
            "operation": self.operation,
            "dir": self.dir,
            "dry_run": self.dry_run,
            "summary": {
                "renames": self.renames(),
                "failed": self.failures(),
            },
            "groups": self.groups,
            "applied": self.applied,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        let renames = self.renames();

        if renames == 0 {
            writeln!(output, "Nothing to rename in {}", self.dir.display()).unwrap();
            return output;
        }

        match &self.applied {
            None => {
                writeln!(
                    output,
                    "Fileorder {}: {} renames planned (dry run)",
                    self.operation, renames
                )
                .unwrap();
            },
            Some(report) => {
                writeln!(
                    output,
                    "✓ Renamed {} of {} entries",
                    report.renamed.len(),
                    renames
                )
                .unwrap();
                for failure in &report.failed {
                    writeln!(
                        output,
                        "✗ {} -> {}: {}",
                        failure.from.display(),
                        failure.to.display(),
                        failure.error
                    )
                    .unwrap();
                }
            },
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

fn capitalize(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Folder => "Folder",
        EntryKind::File => "File",
    }
}
