use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::ext::{BestEffortPathExt, SnapshotPathExt};
use crate::filesystem::{FileSystem, OsFileSystem};

use super::FlatSnapshot;

impl FlatSnapshot {
    /// Writes the snapshot into `dir` on the live filesystem. See [`FlatSnapshot::write_fs`].
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<(), FlatWriteError> {
        self.write_fs(&OsFileSystem, dir)
    }

    /// Writes every file of the snapshot below `dir`, creating missing parent
    /// directories on the way.
    ///
    /// Existing files are overwritten. A directory standing where a file
    /// should go fails the write and is left untouched. The first failure
    /// stops the write; files written before it stay.
    pub fn write_fs<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        dir: impl AsRef<Path>,
    ) -> Result<(), FlatWriteError> {
        let dir = dir.as_ref();
        debug!(
            "Writing {} files into {}",
            self.len(),
            dir.best_effort_path_display()
        );

        for (key, contents) in self.iter() {
            let path = dir.join_key(key);
            let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
            if let Some(parent) = parent {
                fs.create_dir_all(parent)
                    .context(CreateParentDirsSnafu { path: parent })?;
            }
            trace!("Writing {} bytes to {}", contents.len(), path.display());
            fs.write_file(&path, contents)
                .context(WriteFileSnafu { path: &path })?;
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum FlatWriteError {
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateParentDirsError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to write file {}", path.best_effort_path_display()))]
    WriteFileError { path: PathBuf, source: io::Error },
}

impl FlatWriteError {
    pub fn path(&self) -> &Path {
        match self {
            FlatWriteError::CreateParentDirsError { path, .. }
            | FlatWriteError::WriteFileError { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            FlatWriteError::CreateParentDirsError { source, .. }
            | FlatWriteError::WriteFileError { source, .. } => source,
        }
    }
}
