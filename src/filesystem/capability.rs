use std::io;
use std::path::Path;

use super::{DirEntry, EntryKind};

/// The filesystem operations snapshots need.
///
/// Every method is a blocking call. Implementations report failures as
/// [`io::Error`]s; the classification helpers decide how the snapshot code
/// interprets them and default to matching on [`io::ErrorKind`].
pub trait FileSystem {
    /// Lists the immediate entries of the directory at `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Reads the full contents of the file at `path`.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Writes `contents` to `path`, creating or truncating the file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates a directory along with all of its missing ancestors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Returns the type of the object at `path`.
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;

    fn is_not_found(&self, err: &io::Error) -> bool {
        err.kind() == io::ErrorKind::NotFound
    }

    fn is_already_exists(&self, err: &io::Error) -> bool {
        err.kind() == io::ErrorKind::AlreadyExists
    }

    /// Whether a listing error only signals that there are no more entries.
    fn is_end_of_listing(&self, err: &io::Error) -> bool {
        err.kind() == io::ErrorKind::UnexpectedEof
    }
}
