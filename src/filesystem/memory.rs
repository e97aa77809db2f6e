use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path};

use super::{DirEntry, EntryKind, FileSystem};

/// A node of the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MemoryNode {
    File { contents: Vec<u8> },
    Directory {
        children: HashMap<String, MemoryNode>,
    },
}

impl MemoryNode {
    fn empty_dir() -> Self {
        MemoryNode::Directory {
            children: HashMap::new(),
        }
    }

    fn kind(&self) -> EntryKind {
        match self {
            MemoryNode::File { .. } => EntryKind::File,
            MemoryNode::Directory { .. } => EntryKind::Directory,
        }
    }
}

/// A filesystem that lives entirely in memory.
///
/// Paths are resolved from a single root directory; leading `/` and `.`
/// components are ignored, `..` is rejected. Failures use the same
/// [`io::ErrorKind`]s a Unix system would report, so code exercised against
/// it classifies errors the same way it does against [`super::OsFileSystem`].
#[derive(Debug)]
pub struct MemoryFileSystem {
    root: RefCell<MemoryNode>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn error(kind: io::ErrorKind, path: &Path) -> io::Error {
    io::Error::new(kind, format!("{kind}: {}", path.display()))
}

fn components(path: &Path) -> io::Result<Vec<&str>> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => {
                let Some(name) = name.to_str() else {
                    return Err(error(io::ErrorKind::InvalidInput, path));
                };
                parts.push(name);
            }
            Component::ParentDir => return Err(error(io::ErrorKind::InvalidInput, path)),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    Ok(parts)
}

fn lookup<'a>(root: &'a MemoryNode, parts: &[&str], path: &Path) -> io::Result<&'a MemoryNode> {
    let mut current = root;
    for part in parts {
        match current {
            MemoryNode::Directory { children } => {
                current = children
                    .get(*part)
                    .ok_or_else(|| error(io::ErrorKind::NotFound, path))?;
            }
            MemoryNode::File { .. } => return Err(error(io::ErrorKind::NotADirectory, path)),
        }
    }
    Ok(current)
}

fn lookup_dir_mut<'a>(
    root: &'a mut MemoryNode,
    parts: &[&str],
    path: &Path,
) -> io::Result<&'a mut HashMap<String, MemoryNode>> {
    let mut current = root;
    for part in parts {
        match current {
            MemoryNode::Directory { children } => {
                current = children
                    .get_mut(*part)
                    .ok_or_else(|| error(io::ErrorKind::NotFound, path))?;
            }
            MemoryNode::File { .. } => return Err(error(io::ErrorKind::NotADirectory, path)),
        }
    }
    match current {
        MemoryNode::Directory { children } => Ok(children),
        MemoryNode::File { .. } => Err(error(io::ErrorKind::NotADirectory, path)),
    }
}

impl MemoryFileSystem {
    /// Creates a filesystem holding nothing but an empty root directory.
    pub fn new() -> Self {
        Self {
            root: RefCell::new(MemoryNode::empty_dir()),
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let parts = components(path)?;
        let root = self.root.borrow();
        match lookup(&root, &parts, path)? {
            MemoryNode::Directory { children } => {
                let entries = children
                    .iter()
                    .map(|(name, node)| DirEntry::new(name.clone(), node.kind()))
                    .collect();
                Ok(entries)
            }
            MemoryNode::File { .. } => Err(error(io::ErrorKind::NotADirectory, path)),
        }
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let parts = components(path)?;
        let root = self.root.borrow();
        match lookup(&root, &parts, path)? {
            MemoryNode::File { contents } => Ok(contents.clone()),
            MemoryNode::Directory { .. } => Err(error(io::ErrorKind::IsADirectory, path)),
        }
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let parts = components(path)?;
        let Some((name, parent)) = parts.split_last() else {
            return Err(error(io::ErrorKind::IsADirectory, path));
        };
        let mut root = self.root.borrow_mut();
        let children = lookup_dir_mut(&mut root, parent, path)?;
        if let Some(MemoryNode::Directory { .. }) = children.get(*name) {
            return Err(error(io::ErrorKind::IsADirectory, path));
        }
        children.insert(
            name.to_string(),
            MemoryNode::File {
                contents: contents.to_vec(),
            },
        );
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let parts = components(path)?;
        let Some((name, parent)) = parts.split_last() else {
            return Err(error(io::ErrorKind::AlreadyExists, path));
        };
        let mut root = self.root.borrow_mut();
        let children = lookup_dir_mut(&mut root, parent, path)?;
        if children.contains_key(*name) {
            return Err(error(io::ErrorKind::AlreadyExists, path));
        }
        children.insert(name.to_string(), MemoryNode::empty_dir());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let parts = components(path)?;
        let mut root = self.root.borrow_mut();
        let mut current = &mut *root;
        for (index, part) in parts.iter().enumerate() {
            match current {
                MemoryNode::Directory { children } => {
                    current = children
                        .entry(part.to_string())
                        .or_insert_with(MemoryNode::empty_dir);
                }
                MemoryNode::File { .. } => {
                    return Err(error(io::ErrorKind::NotADirectory, path));
                }
            }
            if let MemoryNode::File { .. } = current {
                let kind = if index + 1 == parts.len() {
                    io::ErrorKind::AlreadyExists
                } else {
                    io::ErrorKind::NotADirectory
                };
                return Err(error(kind, path));
            }
        }
        Ok(())
    }

    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        let parts = components(path)?;
        let root = self.root.borrow();
        lookup(&root, &parts, path).map(MemoryNode::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn fs() -> MemoryFileSystem {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("/some/sub")).unwrap();
        fs.write_file(Path::new("/some/file.txt"), b"contents")
            .unwrap();
        fs
    }

    #[rstest]
    fn read_dir_lists_immediate_entries(fs: MemoryFileSystem) {
        let mut entries = fs.read_dir(Path::new("/some")).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry::new("file.txt", EntryKind::File),
                DirEntry::new("sub", EntryKind::Directory),
            ]
        );
    }

    #[rstest]
    fn root_can_be_addressed_in_several_ways(fs: MemoryFileSystem) {
        assert_eq!(fs.read_dir(Path::new("/")).unwrap().len(), 1);
        assert_eq!(fs.read_dir(Path::new("")).unwrap().len(), 1);
        assert_eq!(fs.read_dir(Path::new("./")).unwrap().len(), 1);
        assert_eq!(
            fs.kind(Path::new("some/./sub")).unwrap(),
            EntryKind::Directory
        );
    }

    #[rstest]
    #[case("/missing", io::ErrorKind::NotFound)]
    #[case("/some/file.txt", io::ErrorKind::NotADirectory)]
    #[case("/some/file.txt/deeper", io::ErrorKind::NotADirectory)]
    #[case("/some/../some", io::ErrorKind::InvalidInput)]
    fn read_dir_errors(fs: MemoryFileSystem, #[case] path: &str, #[case] kind: io::ErrorKind) {
        let err = fs.read_dir(Path::new(path)).unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[rstest]
    fn read_file_returns_contents(fs: MemoryFileSystem) {
        assert_eq!(
            fs.read_file(Path::new("/some/file.txt")).unwrap(),
            b"contents"
        );
        assert_eq!(
            fs.read_file(Path::new("/some/sub")).unwrap_err().kind(),
            io::ErrorKind::IsADirectory
        );
    }

    #[rstest]
    fn write_file_overwrites_files_but_not_directories(fs: MemoryFileSystem) {
        fs.write_file(Path::new("/some/file.txt"), b"new").unwrap();
        assert_eq!(fs.read_file(Path::new("/some/file.txt")).unwrap(), b"new");

        let err = fs.write_file(Path::new("/some/sub"), b"data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);
        assert_eq!(
            fs.kind(Path::new("/some/sub")).unwrap(),
            EntryKind::Directory
        );
    }

    #[rstest]
    fn write_file_needs_existing_parent(fs: MemoryFileSystem) {
        let err = fs.write_file(Path::new("/nope/file"), b"").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn create_dir_rejects_existing_objects(fs: MemoryFileSystem) {
        let dir_err = fs.create_dir(Path::new("/some/sub")).unwrap_err();
        let file_err = fs.create_dir(Path::new("/some/file.txt")).unwrap_err();

        assert!(fs.is_already_exists(&dir_err));
        assert!(fs.is_already_exists(&file_err));
    }

    #[rstest]
    fn create_dir_all_tolerates_existing_directories(fs: MemoryFileSystem) {
        fs.create_dir_all(Path::new("/some/sub/deeper/still"))
            .unwrap();
        fs.create_dir_all(Path::new("/some/sub")).unwrap();

        assert_eq!(
            fs.kind(Path::new("/some/sub/deeper/still")).unwrap(),
            EntryKind::Directory
        );
    }

    #[rstest]
    #[case("/some/file.txt", io::ErrorKind::AlreadyExists)]
    #[case("/some/file.txt/below", io::ErrorKind::NotADirectory)]
    fn create_dir_all_stops_at_files(
        fs: MemoryFileSystem,
        #[case] path: &str,
        #[case] kind: io::ErrorKind,
    ) {
        let err = fs.create_dir_all(Path::new(path)).unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(
            fs.kind(Path::new("/some/file.txt")).unwrap(),
            EntryKind::File
        );
    }
}
