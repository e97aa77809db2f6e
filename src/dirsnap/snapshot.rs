use std::collections::HashMap;
use std::collections::hash_map;

use bincode::{Decode, Encode};

/// A single entry of a [`TreeSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum TreeEntry {
    File,
    Dir(TreeSnapshot),
}

impl TreeEntry {
    pub fn is_file(&self) -> bool {
        matches!(self, TreeEntry::File)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeEntry::Dir(_))
    }

    pub fn as_dir(&self) -> Option<&TreeSnapshot> {
        match self {
            TreeEntry::Dir(children) => Some(children),
            TreeEntry::File => None,
        }
    }
}

impl From<TreeSnapshot> for TreeEntry {
    fn from(children: TreeSnapshot) -> Self {
        TreeEntry::Dir(children)
    }
}

/// Files and directories below some directory, keyed by entry name.
///
/// An empty snapshot stands for an existing, empty directory. Two snapshots
/// are equal when they hold the same names at every level with matching
/// entry types; listing order plays no part.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct TreeSnapshot {
    entries: HashMap<String, TreeEntry>,
}

impl TreeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file entry, builder style.
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.insert(name, TreeEntry::File);
        self
    }

    /// Adds a directory entry holding `children`, builder style.
    pub fn with_dir(mut self, name: impl Into<String>, children: TreeSnapshot) -> Self {
        self.insert(name, TreeEntry::Dir(children));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: TreeEntry) -> Option<TreeEntry> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TreeEntry> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

impl<K: Into<String>> FromIterator<(K, TreeEntry)> for TreeSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, TreeEntry)>>(iter: I) -> Self {
        let mut snapshot = TreeSnapshot::new();
        snapshot.extend(iter);
        snapshot
    }
}

impl<K: Into<String>> Extend<(K, TreeEntry)> for TreeSnapshot {
    fn extend<I: IntoIterator<Item = (K, TreeEntry)>>(&mut self, iter: I) {
        for (name, entry) in iter {
            self.insert(name, entry);
        }
    }
}

impl IntoIterator for TreeSnapshot {
    type Item = (String, TreeEntry);
    type IntoIter = hash_map::IntoIter<String, TreeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TreeSnapshot {
    type Item = (&'a String, &'a TreeEntry);
    type IntoIter = hash_map::Iter<'a, String, TreeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let a = TreeSnapshot::new()
            .with_file("x")
            .with_dir("d", TreeSnapshot::new().with_file("y"));
        let b = TreeSnapshot::new()
            .with_dir("d", TreeSnapshot::new().with_file("y"))
            .with_file("x");

        assert_eq!(a, b);
    }

    #[test]
    fn file_and_empty_dir_differ() {
        let file = TreeSnapshot::new().with_file("d");
        let dir = TreeSnapshot::new().with_dir("d", TreeSnapshot::new());

        assert_ne!(file, dir);
        assert!(file.get("d").is_some_and(TreeEntry::is_file));
        assert!(dir.get("d").is_some_and(TreeEntry::is_dir));
        assert_eq!(
            dir.get("d").and_then(TreeEntry::as_dir),
            Some(&TreeSnapshot::new())
        );
    }

    #[test]
    fn nested_contents_take_part_in_equality() {
        let a = TreeSnapshot::new().with_dir("d", TreeSnapshot::new().with_file("y"));
        let b = TreeSnapshot::new().with_dir("d", TreeSnapshot::new().with_file("z"));

        assert_ne!(a, b);
    }

    #[test]
    fn collects_from_pairs() {
        let snapshot: TreeSnapshot = [
            ("file", TreeEntry::File),
            ("dir", TreeSnapshot::new().into()),
        ]
        .into_iter()
        .collect();

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains("file"));
        assert!(snapshot.contains("dir"));
        assert!(!snapshot.contains("other"));
    }

    #[test]
    fn insert_and_remove_replace_entries() {
        let mut snapshot = TreeSnapshot::new().with_file("a");

        assert_eq!(
            snapshot.insert("a", TreeEntry::Dir(TreeSnapshot::new())),
            Some(TreeEntry::File)
        );
        assert_eq!(
            snapshot.remove("a"),
            Some(TreeEntry::Dir(TreeSnapshot::new()))
        );
        assert!(snapshot.is_empty());
    }
}
