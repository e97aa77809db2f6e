//! Content snapshots of the files below a directory.
//!
//! A [`FlatSnapshot`] maps slash-joined relative paths to file contents.
//! Directories only show up as path prefixes.
//!
//! ```no_run
//! use fsnap::filesnap::{self, FlatSnapshot};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//!
//! FlatSnapshot::new()
//!     .with_file("a_0.txt", "prefix")
//!     .with_file("nested/a_1.txt", "suffix")
//!     .write(dir.path())?;
//!
//! let got = filesnap::read(dir.path(), -1)?;
//! assert_eq!(got.get("nested/a_1.txt"), Some(&b"suffix"[..]));
//! # Ok(())
//! # }
//! ```

mod read;
mod snapshot;
mod write;

pub use read::{FlatReadError, FlatScanFailure, read, read_fs};
pub use snapshot::FlatSnapshot;
pub use write::FlatWriteError;
