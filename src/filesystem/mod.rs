//! Filesystem access as a capability.
//!
//! Snapshot scanning and writing never touch `std::fs` directly. They go
//! through the [`FileSystem`] trait, which is implemented for the live
//! operating system by [`OsFileSystem`] and for tests by the in-memory
//! [`MemoryFileSystem`].

mod capability;
mod entry;
mod memory;
mod os;

pub use capability::FileSystem;
pub use entry::{DirEntry, EntryKind};
pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;
