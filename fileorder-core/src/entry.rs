use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// One sibling item. `id` identifies the physical item and survives renames,
/// `name` is what the ordering is encoded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<Id> {
    pub id: Id,
    pub name: String,
    pub kind: EntryKind,
}

impl<Id> Entry<Id> {
    pub fn new(id: Id, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn file(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, EntryKind::File)
    }

    pub fn folder(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, EntryKind::Folder)
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// A single rename proposed by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRename<Id> {
    pub id: Id,
    pub kind: EntryKind,
    pub from: String,
    pub to: String,
}

/// Renames needed to realise an order. Only entries whose name actually
/// changes are listed; an empty plan means nothing to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan<Id> {
    pub renames: Vec<PlannedRename<Id>>,
}

impl<Id> Default for RenamePlan<Id> {
    fn default() -> Self {
        Self {
            renames: Vec::new(),
        }
    }
}

impl<Id> RenamePlan<Id> {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedRename<Id>> {
        self.renames.iter()
    }

    /// `(from, to)` pairs, mostly useful for assertions and previews.
    pub fn name_pairs(&self) -> Vec<(&str, &str)> {
        self.renames
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
            .collect()
    }

    pub fn extend(&mut self, other: Self) {
        self.renames.extend(other.renames);
    }
}

impl<'a, Id> IntoIterator for &'a RenamePlan<Id> {
    type Item = &'a PlannedRename<Id>;
    type IntoIter = std::slice::Iter<'a, PlannedRename<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.renames.iter()
    }
}
