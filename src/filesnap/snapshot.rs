use std::collections::HashMap;
use std::collections::hash_map;

use bincode::{Decode, Encode};

/// File contents keyed by their slash-joined path relative to a directory.
///
/// Keys always name files. An empty snapshot only says that no files were
/// found; the directory may have been empty or the depth limit may have
/// excluded everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct FlatSnapshot {
    files: HashMap<String, Vec<u8>>,
}

impl FlatSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, builder style.
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(
        &mut self,
        path: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.files.insert(path.into(), contents.into())
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files
            .iter()
            .map(|(path, contents)| (path.as_str(), contents.as_slice()))
    }

    /// File paths in lexical order.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.files.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for FlatSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = FlatSnapshot::new();
        snapshot.extend(iter);
        snapshot
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> Extend<(K, V)> for FlatSnapshot {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (path, contents) in iter {
            self.insert(path, contents);
        }
    }
}

impl IntoIterator for FlatSnapshot {
    type Item = (String, Vec<u8>);
    type IntoIter = hash_map::IntoIter<String, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatSnapshot {
    type Item = (&'a String, &'a Vec<u8>);
    type IntoIter = hash_map::Iter<'a, String, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_string_and_byte_contents() {
        let snapshot: FlatSnapshot = [("a.txt", "text"), ("dir/b.bin", "")].into_iter().collect();

        assert_eq!(snapshot.get("a.txt"), Some(&b"text"[..]));
        assert_eq!(snapshot.get("dir/b.bin"), Some(&b""[..]));
        assert_eq!(snapshot.get("dir"), None);
    }

    #[test]
    fn equality_compares_contents() {
        let a = FlatSnapshot::new().with_file("x", "data");
        let b = FlatSnapshot::new().with_file("x", b"data".to_vec());
        let c = FlatSnapshot::new().with_file("x", "other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn paths_are_sorted() {
        let snapshot = FlatSnapshot::new()
            .with_file("b", "")
            .with_file("a/z", "")
            .with_file("a/b", "");

        assert_eq!(snapshot.paths(), vec!["a/b", "a/z", "b"]);
    }

    #[test]
    fn insert_replaces_contents() {
        let mut snapshot = FlatSnapshot::new().with_file("x", "old");

        assert_eq!(snapshot.insert("x", "new"), Some(b"old".to_vec()));
        assert_eq!(snapshot.remove("x"), Some(b"new".to_vec()));
        assert!(snapshot.is_empty());
        assert!(!snapshot.contains("x"));
    }
}
