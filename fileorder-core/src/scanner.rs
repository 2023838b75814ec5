use crate::compare::sort_by_name;
use crate::entry::{Entry, EntryKind};
use crate::filter::SiblingFilter;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The direct children of one folder, split by kind. Folders and files are
/// ordered and numbered independently of each other.
#[derive(Debug, Clone, Default)]
pub struct SiblingGroups {
    pub dir: PathBuf,
    pub folders: Vec<Entry<PathBuf>>,
    pub files: Vec<Entry<PathBuf>>,
}

impl SiblingGroups {
    pub fn group(&self, kind: EntryKind) -> &[Entry<PathBuf>] {
        match kind {
            EntryKind::Folder => &self.folders,
            EntryKind::File => &self.files,
        }
    }

    pub fn names(&self, kind: EntryKind) -> Vec<&str> {
        self.group(kind).iter().map(|e| e.name.as_str()).collect()
    }
}

/// Read the children of `dir` (no recursion). Hidden entries, names that
/// are not valid UTF-8, and anything `filter` rejects are left out. Each
/// group comes back in natural order.
pub fn scan_siblings(dir: &Path, filter: &SiblingFilter) -> Result<SiblingGroups> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Directory not found: {}", dir.display()))?;
    if !dir.is_dir() {
        anyhow::bail!("invalid directory: {} is not a folder", dir.display());
    }
    let folder_name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let mut entries = Vec::new();
    for item in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let item = item.with_context(|| format!("Failed to read {}", dir.display()))?;
        let path = item.path();
        let Some(name) = item.file_name().to_str().map(str::to_string) else {
            log::warn!("skipping non UTF-8 name {}", path.display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let kind = if path.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        };
        entries.push(Entry::new(path, name, kind));
    }

    let (mut folders, mut files): (Vec<_>, Vec<_>) = filter
        .filter(&folder_name, entries)
        .into_iter()
        .partition(Entry::is_folder);
    sort_by_name(&mut folders, |e| e.name.as_str());
    sort_by_name(&mut files, |e| e.name.as_str());

    log::debug!(
        "scanned {}: {} folders, {} files",
        dir.display(),
        folders.len(),
        files.len()
    );
    Ok(SiblingGroups {
        dir,
        folders,
        files,
    })
}
