//! Turning a desired order into the smallest set of renames.

use crate::codec::{decimal_digits, format_name, leading_digits, parse_prefix, strip_prefix};
use crate::compare::{compare_names, sort_by_name};
use crate::convention::Convention;
use crate::entry::{Entry, PlannedRename, RenamePlan};
use crate::error::PlanError;
use crate::infer::infer_convention;
use std::collections::HashSet;
use std::hash::Hash;

/// Compute the renames that realise `desired_order` under `target`.
///
/// `original_order` is the sibling set as it is now and `desired_order` must
/// be a permutation of it. Bare titles are recovered with
/// `original.delimiter`. When the target enforces no numbering and the order
/// is unchanged, every entry simply keeps (or gets back) its bare title.
/// Otherwise entries are numbered from `target.starting_index` in desired
/// order. Entries whose name would not change are left out of the plan.
pub fn compute_rename_plan<Id>(
    original_order: &[Entry<Id>],
    desired_order: &[Entry<Id>],
    original: &Convention,
    target: &Convention,
) -> Result<RenamePlan<Id>, PlanError>
where
    Id: Clone + Eq + Hash,
{
    check_permutation(original_order, desired_order)?;

    let mut natural: Vec<&Entry<Id>> = original_order.iter().collect();
    sort_by_name(&mut natural, |e| e.name.as_str());
    let stripped_original: Vec<&str> = natural
        .iter()
        .map(|e| strip_prefix(&e.name, &original.delimiter))
        .collect();
    let stripped_desired: Vec<&str> = desired_order
        .iter()
        .map(|e| strip_prefix(&e.name, &original.delimiter))
        .collect();

    let new_names: Vec<String> =
        if target.prefix_min_length == 0 && stripped_desired == stripped_original {
            log::debug!("order unchanged and no enforced numbering, keeping bare titles");
            stripped_desired.iter().map(|t| (*t).to_string()).collect()
        } else {
            let width = target
                .prefix_min_length
                .max(decimal_digits(desired_order.len()));
            stripped_desired
                .iter()
                .enumerate()
                .map(|(position, title)| -> Result<String, PlanError> {
                    let index = u64::try_from(position)
                        .ok()
                        .and_then(|p| p.checked_add(target.starting_index))
                        .ok_or(PlanError::IndexOverflow(position))?;
                    Ok(format_name(title, index, &target.delimiter, width))
                })
                .collect::<Result<_, _>>()?
        };

    let plan = build_plan(desired_order, new_names)?;
    log::debug!(
        "planned {} renames for {} entries",
        plan.len(),
        desired_order.len()
    );
    Ok(plan)
}

/// Suggest a name for `outlier` that appends it after the numbering used by
/// `sibling_names` (which must not include the outlier).
///
/// Returns `None` when the siblings follow no convention, or when the outlier
/// already carries a prefix under the siblings' delimiter.
pub fn suggest_fixed_name<S: AsRef<str>>(
    sibling_names: &[S],
    outlier_name: &str,
) -> Option<String> {
    let convention = infer_convention(sibling_names)?;
    if parse_prefix(outlier_name, &convention.delimiter).is_some() {
        return None;
    }

    let count = sibling_names.len();
    let index = u64::try_from(count)
        .ok()?
        .checked_add(convention.starting_index)?;
    let width = convention.prefix_min_length.max(decimal_digits(count));
    Some(format_name(
        strip_prefix(outlier_name, &convention.delimiter),
        index,
        &convention.delimiter,
        width,
    ))
}

/// Names without any numeric prefix in a set where at least one sibling has
/// one, returned as positions into `names`.
pub fn find_outliers<S: AsRef<str>>(names: &[S]) -> Vec<usize> {
    let (numbered, bare): (Vec<usize>, Vec<usize>) =
        (0..names.len()).partition(|i| leading_digits(names[*i].as_ref()) > 0);
    if numbered.is_empty() {
        return Vec::new();
    }
    bare
}

/// Suggested fixes for every outlier in `names`, as `(position, new name)`.
///
/// Outliers are appended one after another in natural order, each fix
/// counting as a sibling for the next one. A fix whose name is already taken
/// by an entry in `names` is dropped and does not use up a number.
pub fn suggest_fixes<S: AsRef<str>>(names: &[S]) -> Vec<(usize, String)> {
    let mut outliers = find_outliers(names);
    if outliers.is_empty() {
        return Vec::new();
    }
    outliers.sort_by(|a, b| compare_names(names[*a].as_ref(), names[*b].as_ref()));

    let mut siblings: Vec<String> = names
        .iter()
        .enumerate()
        .filter(|(i, _)| !outliers.contains(i))
        .map(|(_, n)| n.as_ref().to_string())
        .collect();

    let mut fixes = Vec::new();
    for position in outliers {
        let Some(fixed) = suggest_fixed_name(&siblings, names[position].as_ref()) else {
            break;
        };
        if names.iter().any(|name| name.as_ref() == fixed) {
            log::warn!(
                "not renaming '{}': '{}' already exists",
                names[position].as_ref(),
                fixed
            );
            continue;
        }
        siblings.push(fixed.clone());
        fixes.push((position, fixed));
    }
    fixes
}

/// Plan that removes the numeric prefix from every entry.
pub fn clear_ordering_plan<Id>(
    entries: &[Entry<Id>],
    delimiter: &str,
) -> Result<RenamePlan<Id>, PlanError>
where
    Id: Clone + Eq + Hash,
{
    check_unique(entries)?;
    let new_names = entries
        .iter()
        .map(|e| strip_prefix(&e.name, delimiter).to_string())
        .collect();
    build_plan(entries, new_names)
}

/// Move the item at `from` so that it ends up at `to`, shifting the items in
/// between. This is the drag-and-drop primitive.
pub fn move_entry<T>(order: &mut Vec<T>, from: usize, to: usize) -> Result<(), PlanError> {
    let len = order.len();
    for position in [from, to] {
        if position >= len {
            return Err(PlanError::PositionOutOfRange { position, len });
        }
    }
    let item = order.remove(from);
    order.insert(to, item);
    Ok(())
}

/// Desired order with the entries named in `leading` first, in that order,
/// followed by the remaining entries in their current order.
pub fn arrange<Id, S>(current: &[Entry<Id>], leading: &[S]) -> Result<Vec<Entry<Id>>, PlanError>
where
    Id: Clone,
    S: AsRef<str>,
{
    let mut taken = vec![false; current.len()];
    let mut order = Vec::with_capacity(current.len());
    for name in leading {
        let name = name.as_ref();
        let position = current
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| PlanError::UnknownEntry(name.to_string()))?;
        if taken[position] {
            return Err(PlanError::DuplicateName(name.to_string()));
        }
        taken[position] = true;
        order.push(current[position].clone());
    }
    order.extend(
        current
            .iter()
            .zip(&taken)
            .filter(|(_, taken)| !**taken)
            .map(|(e, _)| e.clone()),
    );
    Ok(order)
}

fn check_unique<Id>(entries: &[Entry<Id>]) -> Result<(), PlanError>
where
    Id: Eq + Hash,
{
    let mut names = HashSet::with_capacity(entries.len());
    let mut ids = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !ids.insert(&entry.id) {
            return Err(PlanError::DuplicateEntry(entry.name.clone()));
        }
        if !names.insert(entry.name.as_str()) {
            return Err(PlanError::DuplicateName(entry.name.clone()));
        }
    }
    Ok(())
}

fn check_permutation<Id>(original: &[Entry<Id>], desired: &[Entry<Id>]) -> Result<(), PlanError>
where
    Id: Eq + Hash,
{
    check_unique(original)?;
    if original.len() != desired.len() {
        return Err(PlanError::NotAPermutation(format!(
            "expected {} entries, got {}",
            original.len(),
            desired.len()
        )));
    }

    let known: HashSet<&Id> = original.iter().map(|e| &e.id).collect();
    let mut seen = HashSet::with_capacity(desired.len());
    for entry in desired {
        if !known.contains(&entry.id) {
            return Err(PlanError::NotAPermutation(format!(
                "'{}' is not one of the siblings",
                entry.name
            )));
        }
        if !seen.insert(&entry.id) {
            return Err(PlanError::NotAPermutation(format!(
                "'{}' appears more than once",
                entry.name
            )));
        }
    }
    Ok(())
}

fn build_plan<Id: Clone>(
    entries: &[Entry<Id>],
    new_names: Vec<String>,
) -> Result<RenamePlan<Id>, PlanError> {
    let mut finals = HashSet::with_capacity(entries.len());
    for name in &new_names {
        if !finals.insert(name.as_str()) {
            return Err(PlanError::NameCollision(name.clone()));
        }
    }

    if let Some((entry, _)) = entries.iter().zip(&new_names).find(|(_, to)| to.is_empty()) {
        return Err(PlanError::EmptyName(entry.name.clone()));
    }

    let renames = entries
        .iter()
        .zip(new_names)
        .filter(|(entry, to)| entry.name != *to)
        .map(|(entry, to)| PlannedRename {
            id: entry.id.clone(),
            kind: entry.kind,
            from: entry.name.clone(),
            to,
        })
        .collect();
    Ok(RenamePlan { renames })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<Entry<usize>> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Entry::file(i, *name))
            .collect()
    }

    fn reorder(entries: &[Entry<usize>], names: &[&str]) -> Vec<Entry<usize>> {
        arrange(entries, names).unwrap()
    }

    #[test]
    fn test_swap_renames_only_moved_entries() {
        let original = files(&["01 Intro.md", "02 Body.md", "03 Outro.md"]);
        let convention = infer_convention(&["01 Intro.md", "02 Body.md", "03 Outro.md"]).unwrap();
        let desired = reorder(&original, &["02 Body.md", "01 Intro.md", "03 Outro.md"]);

        let plan = compute_rename_plan(&original, &desired, &convention, &convention).unwrap();
        assert_eq!(
            plan.name_pairs(),
            vec![("02 Body.md", "01 Body.md"), ("01 Intro.md", "02 Intro.md")]
        );
        assert_eq!(plan.renames[0].id, 1);
        assert_eq!(plan.renames[1].id, 0);
    }

    #[test]
    fn test_unchanged_bare_set_is_a_no_op() {
        let original = files(&["Alpha", "Beta", "Gamma"]);
        let convention = Convention::default();
        let plan = compute_rename_plan(&original, &original, &convention, &convention).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_first_reorder_numbers_everything() {
        let original = files(&["Alpha", "Beta", "Gamma"]);
        let desired = reorder(&original, &["Gamma"]);
        let convention = Convention::default();

        let plan = compute_rename_plan(&original, &desired, &convention, &convention).unwrap();
        assert_eq!(
            plan.name_pairs(),
            vec![
                ("Gamma", "0 Gamma"),
                ("Alpha", "1 Alpha"),
                ("Beta", "2 Beta")
            ]
        );
    }

    #[test]
    fn test_width_grows_with_count() {
        let names: Vec<String> = (0..12).map(|i| format!("item{i}")).collect();
        let original: Vec<Entry<usize>> = names
            .iter()
            .enumerate()
            .map(|(i, n)| Entry::file(i, n.as_str()))
            .collect();
        let mut desired = original.clone();
        desired.reverse();

        let plan =
            compute_rename_plan(&original, &desired, &Convention::default(), &Convention::default())
                .unwrap();
        assert_eq!(plan.len(), 12);
        assert_eq!(plan.renames[0].to, "00 item11");
        assert_eq!(plan.renames[11].to, "11 item0");
    }

    #[test]
    fn test_enforced_width_renumbers_unchanged_order() {
        let original = files(&["Alpha", "Beta"]);
        let target = Convention::new(". ", 3, 1);
        let plan =
            compute_rename_plan(&original, &original, &Convention::default(), &target).unwrap();
        assert_eq!(
            plan.name_pairs(),
            vec![("Alpha", "001. Alpha"), ("Beta", "002. Beta")]
        );
    }

    #[test]
    fn test_delimiter_change_rewrites_all() {
        let original = files(&["1 a", "2 b"]);
        let current = Convention::new(" ", 1, 1);
        let target = Convention::new("-", 1, 1);
        let plan = compute_rename_plan(&original, &original, &current, &target).unwrap();
        assert_eq!(plan.name_pairs(), vec![("1 a", "1-a"), ("2 b", "2-b")]);
    }

    #[test]
    fn test_unchanged_order_without_numbering_strips_prefixes() {
        let original = files(&["0 a", "1 b", "2 c"]);
        let convention = Convention::new(" ", 0, 0);
        let plan = compute_rename_plan(&original, &original, &convention, &convention).unwrap();
        assert_eq!(
            plan.name_pairs(),
            vec![("0 a", "a"), ("1 b", "b"), ("2 c", "c")]
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let original = files(&["b", "a", "c"]);
        let desired = reorder(&original, &["c", "a"]);
        let convention = Convention::new(" ", 2, 1);
        let first = compute_rename_plan(&original, &desired, &convention, &convention).unwrap();
        let second = compute_rename_plan(&original, &desired, &convention, &convention).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_permutations() {
        let original = files(&["a", "b", "c"]);
        let convention = Convention::default();

        let short = original[..2].to_vec();
        assert!(matches!(
            compute_rename_plan(&original, &short, &convention, &convention),
            Err(PlanError::NotAPermutation(_))
        ));

        let repeated = vec![original[0].clone(), original[0].clone(), original[1].clone()];
        assert!(matches!(
            compute_rename_plan(&original, &repeated, &convention, &convention),
            Err(PlanError::NotAPermutation(_))
        ));

        let mut stranger = original.clone();
        stranger[2] = Entry::file(99, "z");
        assert!(matches!(
            compute_rename_plan(&original, &stranger, &convention, &convention),
            Err(PlanError::NotAPermutation(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let original = vec![Entry::file(0, "a"), Entry::file(1, "a")];
        let convention = Convention::default();
        assert_eq!(
            compute_rename_plan(&original, &original, &convention, &convention),
            Err(PlanError::DuplicateName("a".to_string()))
        );
    }

    #[test]
    fn test_rejects_colliding_titles() {
        let original = files(&["1 Notes", "Notes"]);
        let convention = Convention::new(" ", 0, 1);
        let desired = reorder(&original, &["Notes"]);
        assert_eq!(
            compute_rename_plan(&original, &desired, &convention, &convention),
            Err(PlanError::NameCollision("Notes".to_string()))
        );
    }

    #[test]
    fn test_index_overflow() {
        let original = files(&["a", "b"]);
        let target = Convention::new(" ", 0, u64::MAX);
        let desired = reorder(&original, &["b"]);
        assert_eq!(
            compute_rename_plan(&original, &desired, &Convention::default(), &target),
            Err(PlanError::IndexOverflow(1))
        );
    }

    #[test]
    fn test_suggest_fixed_name_appends() {
        let siblings = ["01 Intro.md", "02 Body.md"];
        assert_eq!(
            suggest_fixed_name(&siblings, "Stray.md"),
            Some("03 Stray.md".to_string())
        );
    }

    #[test]
    fn test_suggest_fixed_name_keeps_starting_index() {
        let siblings = ["0 a", "1 b", "2 c"];
        assert_eq!(suggest_fixed_name(&siblings, "d"), Some("3 d".to_string()));
    }

    #[test]
    fn test_no_suggestion_when_outlier_conforms() {
        let siblings = ["01 Intro.md", "02 Body.md"];
        assert_eq!(suggest_fixed_name(&siblings, "07 Extra.md"), None);
    }

    #[test]
    fn test_no_suggestion_without_convention() {
        assert_eq!(suggest_fixed_name(&["Intro.md", "Body.md"], "Stray.md"), None);
        assert_eq!(suggest_fixed_name::<&str>(&[], "Stray.md"), None);
    }

    #[test]
    fn test_suggest_fixes_numbers_strays_consecutively() {
        let names = ["01 Intro.md", "Zeta.md", "02 Body.md", "Alpha.md"];
        assert_eq!(find_outliers(&names), vec![1, 3]);
        assert_eq!(
            suggest_fixes(&names),
            vec![(3, "03 Alpha.md".to_string()), (1, "04 Zeta.md".to_string())]
        );
    }

    #[test]
    fn test_taken_fix_leaves_no_gap() {
        let names = ["1 A", "3 Stray", "Stray", "Zed"];
        assert_eq!(find_outliers(&names), vec![2, 3]);
        assert_eq!(suggest_fixes(&names), vec![(3, "3 Zed".to_string())]);
    }

    #[test]
    fn test_no_outliers_in_fully_bare_set() {
        assert!(find_outliers(&["a", "b"]).is_empty());
        assert!(suggest_fixes(&["a", "b"]).is_empty());
    }

    #[test]
    fn test_clear_ordering_plan() {
        let entries = files(&["01 Intro.md", "Body.md", "02 Outro.md"]);
        let plan = clear_ordering_plan(&entries, " ").unwrap();
        assert_eq!(
            plan.name_pairs(),
            vec![("01 Intro.md", "Intro.md"), ("02 Outro.md", "Outro.md")]
        );

        let whole_title = files(&["01 Intro.md"]);
        assert_eq!(
            clear_ordering_plan(&whole_title, " Intro.md"),
            Err(PlanError::EmptyName("01 Intro.md".to_string()))
        );

        let colliding = files(&["1 a", "a"]);
        assert_eq!(
            clear_ordering_plan(&colliding, " "),
            Err(PlanError::NameCollision("a".to_string()))
        );
    }

    #[test]
    fn test_move_entry() {
        let mut order = vec!["a", "b", "c", "d"];
        move_entry(&mut order, 0, 2).unwrap();
        assert_eq!(order, vec!["b", "c", "a", "d"]);
        move_entry(&mut order, 3, 0).unwrap();
        assert_eq!(order, vec!["d", "b", "c", "a"]);
        assert_eq!(
            move_entry(&mut order, 4, 0),
            Err(PlanError::PositionOutOfRange { position: 4, len: 4 })
        );
    }

    #[test]
    fn test_arrange() {
        let entries = files(&["a", "b", "c"]);
        let order = arrange(&entries, &["c"]).unwrap();
        let names: Vec<_> = order.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        assert_eq!(
            arrange(&entries, &["x"]).unwrap_err(),
            PlanError::UnknownEntry("x".to_string())
        );
        assert_eq!(
            arrange(&entries, &["a", "a"]).unwrap_err(),
            PlanError::DuplicateName("a".to_string())
        );
    }
}
