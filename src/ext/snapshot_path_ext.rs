use std::path::{Path, PathBuf};

/// Appends `name` to a slash-joined relative key.
pub fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

pub trait SnapshotPathExt {
    /// Resolves a slash-joined relative key below `self`, one path segment per
    /// key segment. Empty segments are skipped.
    fn join_key(&self, key: &str) -> PathBuf;
}

impl SnapshotPathExt for Path {
    fn join_key(&self, key: &str) -> PathBuf {
        key.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.to_path_buf(), |path, segment| path.join(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("", "a", "a")]
    #[case("a", "b", "a/b")]
    #[case("a/b", "c.txt", "a/b/c.txt")]
    fn join_key_uses_slashes(#[case] prefix: &str, #[case] name: &str, #[case] expected: &str) {
        assert_eq!(join_key(prefix, name), expected);
    }

    #[test]
    fn path_join_key_splits_segments() {
        let root = Path::new("/tmp/root");
        assert_eq!(
            root.join_key("a/b.txt"),
            Path::new("/tmp/root").join("a").join("b.txt")
        );
        assert_eq!(root.join_key("x"), root.join("x"));
    }
}
