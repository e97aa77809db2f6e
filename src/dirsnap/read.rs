use std::io;
use std::path::{Path, PathBuf};

use snafu::Snafu;
use tracing::{debug, trace};

use crate::depth::Depth;
use crate::ext::BestEffortPathExt;
use crate::filesystem::{EntryKind, FileSystem, OsFileSystem};

use super::{TreeEntry, TreeSnapshot};

/// Scans `dir` on the live filesystem. See [`read_fs`].
pub fn read(dir: impl AsRef<Path>, depth: impl Into<Depth>) -> Result<TreeSnapshot, TreeReadError> {
    read_fs(&OsFileSystem, dir, depth)
}

/// Scans `dir` through `fs` and returns the tree of its files and folders.
///
/// With a negative `depth` every subdirectory is scanned. Otherwise the scan
/// descends at most `depth` levels below `dir`; directories at the cutoff are
/// recorded as empty snapshots without looking inside them.
///
/// On failure the returned error carries whatever had been scanned so far.
pub fn read_fs<F: FileSystem + ?Sized>(
    fs: &F,
    dir: impl AsRef<Path>,
    depth: impl Into<Depth>,
) -> Result<TreeSnapshot, TreeReadError> {
    let dir = dir.as_ref();
    let depth = depth.into();
    debug!(
        "Scanning directory tree {} with depth {}",
        dir.best_effort_path_display(),
        depth
    );

    let mut snapshot = TreeSnapshot::new();
    match scan_into(fs, dir, depth, &mut snapshot) {
        Ok(()) => {
            debug!("Scanned {} top-level entries", snapshot.len());
            Ok(snapshot)
        }
        Err(ListFailure { path, source }) => Err(TreeReadError {
            root: dir.to_path_buf(),
            path,
            partial: snapshot,
            not_found: fs.is_not_found(&source),
            source,
        }),
    }
}

struct ListFailure {
    path: PathBuf,
    source: io::Error,
}

fn scan_into<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    depth: Depth,
    snapshot: &mut TreeSnapshot,
) -> Result<(), ListFailure> {
    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if fs.is_end_of_listing(&err) => Vec::new(),
        Err(source) => {
            return Err(ListFailure {
                path: dir.to_path_buf(),
                source,
            });
        }
    };
    trace!("{} holds {} entries", dir.display(), entries.len());

    for entry in entries {
        match entry.kind {
            EntryKind::File => {
                snapshot.insert(entry.name, TreeEntry::File);
            }
            EntryKind::Directory if !depth.can_descend() => {
                snapshot.insert(entry.name, TreeEntry::Dir(TreeSnapshot::new()));
            }
            EntryKind::Directory => {
                let mut children = TreeSnapshot::new();
                let result = scan_into(fs, &dir.join(&entry.name), depth.descend(), &mut children);
                snapshot.insert(entry.name, TreeEntry::Dir(children));
                result?;
            }
        }
    }

    Ok(())
}

/// A tree scan stopped because a directory could not be listed.
#[derive(Debug, Snafu)]
#[snafu(display(
    "Failed to scan directory tree {}: cannot list {}",
    root.best_effort_path_display(),
    path.best_effort_path_display()
))]
pub struct TreeReadError {
    root: PathBuf,
    path: PathBuf,
    partial: TreeSnapshot,
    not_found: bool,
    source: io::Error,
}

impl TreeReadError {
    /// The directory whose listing failed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries scanned before the failure.
    pub fn partial(&self) -> &TreeSnapshot {
        &self.partial
    }

    pub fn into_partial(self) -> TreeSnapshot {
        self.partial
    }

    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// Whether the filesystem classified the failure as a missing directory.
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }
}
