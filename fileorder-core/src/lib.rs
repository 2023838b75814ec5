#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Keeps a human-chosen order of sibling files and folders by encoding a
//! numeric prefix into each name, e.g. `01 Intro.md`, `02 Body.md`.
//!
//! The core is pure: [`infer_convention`] discovers the numbering already in
//! use and [`compute_rename_plan`] computes the minimal set of renames for a
//! new order. Everything under [`operations`] is the filesystem glue around
//! it.

pub mod apply;
pub mod codec;
pub mod compare;
pub mod config;
pub mod convention;
pub mod entry;
pub mod error;
pub mod filter;
pub mod infer;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;
pub mod scanner;

pub use apply::{apply_plan, AppliedRename, ApplyOptions, ApplyReport, FailedRename};
pub use codec::{decimal_digits, format_name, parse_prefix, strip_prefix, Prefixed};
pub use compare::{compare_names, sort_by_name};
pub use config::{Config, DefaultsConfig};
pub use convention::{Convention, ConventionOverrides};
pub use entry::{Entry, EntryKind, PlannedRename, RenamePlan};
pub use error::PlanError;
pub use filter::SiblingFilter;
pub use infer::infer_convention;
pub use operations::{
    clear_operation, fix_operation, inspect_operation, reorder_operation, ReorderRequest,
    ALL_GROUPS,
};
pub use output::{
    GroupInspection, GroupPlan, InspectResult, OutlierFix, OutputFormat, OutputFormatter,
    PlanResult, VersionResult,
};
pub use planner::{
    arrange, clear_ordering_plan, compute_rename_plan, find_outliers, move_entry,
    suggest_fixed_name, suggest_fixes,
};
pub use preview::{render_plan, write_preview, Preview};
pub use scanner::{scan_siblings, SiblingGroups};
