use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::ext::BestEffortPathExt;
use crate::filesystem::{EntryKind, FileSystem, OsFileSystem};

use super::{TreeEntry, TreeSnapshot};

impl TreeSnapshot {
    /// Writes the snapshot into `dir` on the live filesystem. See [`TreeSnapshot::write_fs`].
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<(), TreeWriteError> {
        self.write_fs(&OsFileSystem, dir)
    }

    /// Creates the snapshot's files and directories below `dir`.
    ///
    /// An object that already exists with the expected type is accepted, so
    /// writing the same snapshot twice succeeds. File entries are written as
    /// empty files, truncating existing ones. A file where a directory is
    /// wanted, or the other way round, fails the write.
    ///
    /// The first failure stops the write; entries created before it stay.
    pub fn write_fs<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        dir: impl AsRef<Path>,
    ) -> Result<(), TreeWriteError> {
        let dir = dir.as_ref();
        debug!(
            "Writing {} entries into {}",
            self.len(),
            dir.best_effort_path_display()
        );

        for (name, entry) in self.iter() {
            let path = dir.join(name);
            match entry {
                TreeEntry::File => {
                    trace!("Creating file {}", path.display());
                    let result = fs.write_file(&path, &[]);
                    tolerate_collision(fs, result, &path, EntryKind::File)
                        .context(CreateFileSnafu { path: &path })?;
                }
                TreeEntry::Dir(children) => {
                    trace!("Creating directory {}", path.display());
                    let result = fs.create_dir(&path);
                    tolerate_collision(fs, result, &path, EntryKind::Directory)
                        .context(CreateDirSnafu { path: &path })?;
                    children.write_fs(fs, &path)?;
                }
            }
        }

        Ok(())
    }
}

/// Accepts an "already exists" failure when the existing object has the wanted type.
fn tolerate_collision<F: FileSystem + ?Sized>(
    fs: &F,
    result: io::Result<()>,
    path: &Path,
    wanted: EntryKind,
) -> io::Result<()> {
    match result {
        Err(err) if fs.is_already_exists(&err) => match fs.kind(path) {
            Ok(kind) if kind == wanted => Ok(()),
            _ => Err(err),
        },
        other => other,
    }
}

#[derive(Debug, Snafu)]
pub enum TreeWriteError {
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirError { path: PathBuf, source: io::Error },
}

impl TreeWriteError {
    /// The path that could not be created.
    pub fn path(&self) -> &Path {
        match self {
            TreeWriteError::CreateFileError { path, .. }
            | TreeWriteError::CreateDirError { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            TreeWriteError::CreateFileError { source, .. }
            | TreeWriteError::CreateDirError { source, .. } => source,
        }
    }
}
