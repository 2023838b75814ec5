use crate::entry::{Entry, EntryKind};
use regex::Regex;

/// Decides which children of a folder take part in ordering. Ignored entries
/// are never seen by the planner and therefore never renamed.
#[derive(Debug, Clone, Default)]
pub struct SiblingFilter {
    ignore: Option<Regex>,
    ignore_folder_file: bool,
}

impl SiblingFilter {
    pub fn new(ignore: Option<Regex>, ignore_folder_file: bool) -> Self {
        Self {
            ignore,
            ignore_folder_file,
        }
    }

    pub fn is_ignored<Id>(&self, folder_name: &str, entry: &Entry<Id>) -> bool {
        if self
            .ignore
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&entry.name))
        {
            return true;
        }
        self.ignore_folder_file
            && entry.kind == EntryKind::File
            && entry
                .name
                .strip_suffix(".md")
                .is_some_and(|stem| stem == folder_name)
    }

    pub fn filter<Id>(&self, folder_name: &str, entries: Vec<Entry<Id>>) -> Vec<Entry<Id>> {
        entries
            .into_iter()
            .filter(|entry| !self.is_ignored(folder_name, entry))
            .collect()
    }
}
