use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;

use super::{DirEntry, EntryKind, FileSystem};

/// The live filesystem of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        trace!("Listing {}", path.display());
        fs::read_dir(path)?
            .map(|entry| {
                let entry = entry?;
                // Symlinks are not followed here, a link to a directory lists as a file.
                let kind = kind_of(entry.file_type()?);
                let name = entry.file_name().into_string().map_err(|name| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("file name {name:?} is not valid UTF-8"),
                    )
                })?;
                Ok(DirEntry { name, kind })
            })
            .collect()
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        fs::metadata(path).map(|meta| kind_of(meta.file_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_dir_reports_names_and_kinds() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("sub")).expect("Failed to create dir");
        fs::write(temp_dir.path().join("file.txt"), b"x").expect("Failed to write file");

        let mut entries = OsFileSystem
            .read_dir(temp_dir.path())
            .expect("Failed to list directory");
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry::new("file.txt", EntryKind::File),
                DirEntry::new("sub", EntryKind::Directory),
            ]
        );
    }

    #[test]
    fn read_dir_of_missing_path_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let err = OsFileSystem
            .read_dir(&temp_dir.path().join("missing"))
            .unwrap_err();

        assert!(OsFileSystem.is_not_found(&err));
    }

    #[test]
    fn create_dir_twice_is_already_exists() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join("dir");

        OsFileSystem.create_dir(&dir).expect("Failed to create dir");
        let err = OsFileSystem.create_dir(&dir).unwrap_err();

        assert!(OsFileSystem.is_already_exists(&err));
        assert_eq!(OsFileSystem.kind(&dir).unwrap(), EntryKind::Directory);
    }
}
