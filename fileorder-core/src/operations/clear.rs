use super::{finish, load_groups, resolve_original};
use crate::config::Config;
use crate::entry::EntryKind;
use crate::output::{GroupPlan, PlanResult};
use crate::planner::clear_ordering_plan;
use anyhow::Result;
use std::path::Path;

/// Clear operation - drops the numeric prefixes of the given groups so
/// their natural name order applies again
pub fn clear_operation(
    dir: &Path,
    config: &Config,
    kinds: &[EntryKind],
    dry_run: bool,
) -> Result<PlanResult> {
    let siblings = load_groups(dir, config)?;
    let mut groups = Vec::new();

    for kind in kinds {
        let names = siblings.names(*kind);
        let convention = resolve_original(&names, config);
        let plan = clear_ordering_plan(siblings.group(*kind), &convention.delimiter)?;
        let mut target = convention.clone();
        target.prefix_min_length = 0;
        groups.push(GroupPlan {
            kind: *kind,
            convention,
            target,
            plan,
        });
    }

    finish("clear", siblings.dir, groups, dry_run, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::operations::ALL_GROUPS;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clear_strips_prefixes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["01. Intro.md", "02. Body.md"] {
            fs::write(root.join(name), "").unwrap();
        }
        fs::create_dir(root.join("1. Assets")).unwrap();
        fs::create_dir(root.join("2. Images")).unwrap();

        let result = clear_operation(root, &Config::default(), &[EntryKind::File], false).unwrap();
        assert_eq!(result.renames(), 2);
        assert!(root.join("Intro.md").exists());
        assert!(root.join("Body.md").exists());
        assert!(root.join("1. Assets").exists());

        clear_operation(root, &Config::default(), &ALL_GROUPS, false).unwrap();
        assert!(root.join("Assets").exists());
        assert!(root.join("Images").exists());
    }

    #[test]
    fn test_clear_refuses_collisions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["1 Notes", "Notes"] {
            fs::write(root.join(name), "").unwrap();
        }

        let err = clear_operation(root, &Config::default(), &[EntryKind::File], true).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlanError>(),
            Some(&PlanError::NameCollision("Notes".to_string()))
        );
    }
}
