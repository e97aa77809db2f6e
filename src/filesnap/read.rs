use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::depth::Depth;
use crate::ext::{BestEffortPathExt, join_key};
use crate::filesystem::{EntryKind, FileSystem, OsFileSystem};

use super::FlatSnapshot;

/// Scans `dir` on the live filesystem. See [`read_fs`].
pub fn read(dir: impl AsRef<Path>, depth: impl Into<Depth>) -> Result<FlatSnapshot, FlatReadError> {
    read_fs(&OsFileSystem, dir, depth)
}

/// Reads every file below `dir` through `fs`, keyed by its path relative to `dir`.
///
/// With a negative `depth` every subdirectory is visited. Otherwise at most
/// `depth` levels below `dir` are visited; deeper directories are skipped
/// entirely and leave no trace in the snapshot.
pub fn read_fs<F: FileSystem + ?Sized>(
    fs: &F,
    dir: impl AsRef<Path>,
    depth: impl Into<Depth>,
) -> Result<FlatSnapshot, FlatReadError> {
    let dir = dir.as_ref();
    let depth = depth.into();
    debug!(
        "Scanning files below {} with depth {}",
        dir.best_effort_path_display(),
        depth
    );

    let mut snapshot = FlatSnapshot::new();
    match scan_into(fs, dir, "", depth, &mut snapshot) {
        Ok(()) => {
            debug!("Read {} files", snapshot.len());
            Ok(snapshot)
        }
        Err(source) => Err(FlatReadError {
            root: dir.to_path_buf(),
            partial: snapshot,
            not_found: fs.is_not_found(source.io_error()),
            source,
        }),
    }
}

fn scan_into<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    prefix: &str,
    depth: Depth,
    snapshot: &mut FlatSnapshot,
) -> Result<(), FlatScanFailure> {
    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if fs.is_end_of_listing(&err) => Vec::new(),
        Err(err) => return Err(err).context(ListDirSnafu { path: dir }),
    };
    trace!("{} holds {} entries", dir.display(), entries.len());

    for entry in entries {
        let path = dir.join(&entry.name);
        let key = join_key(prefix, &entry.name);
        match entry.kind {
            EntryKind::File => {
                let contents = fs.read_file(&path).context(ReadFileSnafu { path: &path })?;
                snapshot.insert(key, contents);
            }
            EntryKind::Directory if depth.can_descend() => {
                scan_into(fs, &path, &key, depth.descend(), snapshot)?;
            }
            EntryKind::Directory => {
                trace!("Skipping {} beyond depth limit", path.display());
            }
        }
    }

    Ok(())
}

/// The step at which a file scan failed.
#[derive(Debug, Snafu)]
pub enum FlatScanFailure {
    #[snafu(display("Failed to list directory {}", path.best_effort_path_display()))]
    ListDirError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read file {}", path.best_effort_path_display()))]
    ReadFileError { path: PathBuf, source: io::Error },
}

impl FlatScanFailure {
    fn io_error(&self) -> &io::Error {
        match self {
            FlatScanFailure::ListDirError { source, .. }
            | FlatScanFailure::ReadFileError { source, .. } => source,
        }
    }
}

/// A file scan stopped early.
#[derive(Debug, Snafu)]
#[snafu(display("Failed to scan files below {}", root.best_effort_path_display()))]
pub struct FlatReadError {
    root: PathBuf,
    partial: FlatSnapshot,
    not_found: bool,
    source: FlatScanFailure,
}

impl FlatReadError {
    pub fn failure(&self) -> &FlatScanFailure {
        &self.source
    }

    /// The directory or file that could not be read.
    pub fn path(&self) -> &Path {
        match &self.source {
            FlatScanFailure::ListDirError { path, .. }
            | FlatScanFailure::ReadFileError { path, .. } => path,
        }
    }

    /// Files read before the failure.
    ///
    /// A file whose read failed is left out rather than recorded with empty
    /// contents.
    pub fn partial(&self) -> &FlatSnapshot {
        &self.partial
    }

    pub fn into_partial(self) -> FlatSnapshot {
        self.partial
    }

    pub fn io_error(&self) -> &io::Error {
        self.source.io_error()
    }

    /// Whether the filesystem classified the failure as a missing object.
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }
}
