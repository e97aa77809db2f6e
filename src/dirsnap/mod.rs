//! Structural snapshots of directory trees.
//!
//! A [`TreeSnapshot`] records which files and directories exist below a
//! directory, without their contents. It is meant for setting up and checking
//! test fixtures:
//!
//! ```no_run
//! use fsnap::dirsnap::{self, TreeSnapshot};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//!
//! TreeSnapshot::new()
//!     .with_file("file")
//!     .with_dir("dir", TreeSnapshot::new().with_file("subfile"))
//!     .write(dir.path())?;
//!
//! let got = dirsnap::read(dir.path(), -1)?;
//! assert!(got.contains("dir"));
//! # Ok(())
//! # }
//! ```

mod read;
mod snapshot;
mod write;

pub use read::{TreeReadError, read, read_fs};
pub use snapshot::{TreeEntry, TreeSnapshot};
pub use write::TreeWriteError;
