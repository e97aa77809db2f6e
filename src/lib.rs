//! Snapshots of directory trees, for setting up and checking test fixtures.
//!
//! Two snapshot flavours are provided:
//!
//! - [`dirsnap::TreeSnapshot`] records which files and directories exist,
//!   nested the way they are on disk, without contents.
//! - [`filesnap::FlatSnapshot`] records file contents keyed by their
//!   slash-joined relative path; directories are implicit.
//!
//! Each can be scanned from a directory with `read` (live filesystem) or
//! `read_fs` (any [`filesystem::FileSystem`]), and written back with `write`
//! or `write_fs`. Scanning takes a [`Depth`] limit, usually given as a plain
//! integer: `-1` for everything, `0` for the directory itself only.

pub mod archive;
mod depth;
pub mod dirsnap;
mod ext;
pub mod filesnap;
pub mod filesystem;
pub mod fixture;

pub use depth::Depth;
pub use dirsnap::{TreeEntry, TreeSnapshot};
pub use filesnap::FlatSnapshot;

#[cfg(test)]
pub(crate) mod test_support {
    /// Routes `tracing` output of the crate to the test harness.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .without_time()
            .compact()
            .try_init();
    }
}
