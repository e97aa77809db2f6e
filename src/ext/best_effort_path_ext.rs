use std::path::{Component, Path, PathBuf};

/// Renders `path` for messages with `.` and `..` resolved lexically.
///
/// The path is never canonicalized: it may name an object on a virtual
/// filesystem, or one that does not exist yet.
pub fn best_effort_path_display(path: &Path) -> String {
    normalize_path(path).display().to_string()
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/tmp/./a/b", "/tmp/a/b")]
    #[case("/tmp/a/../b", "/tmp/b")]
    #[case("/../a", "/a")]
    #[case("../a/./b", "../a/b")]
    #[case("a/..", ".")]
    #[case("", ".")]
    fn display_resolves_dots_lexically(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Path::new(input).best_effort_path_display(), expected);
    }
}
