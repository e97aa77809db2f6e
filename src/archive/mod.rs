//! Compressed binary form of snapshots, for keeping expected results on disk.
//!
//! An archive is the snapshot encoded with `bincode`'s standard
//! configuration, compressed as a single zstd frame.

use std::io;
use std::path::{Path, PathBuf};

use bincode::error::{DecodeError, EncodeError};
use bincode::{Decode, Encode};
use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::dirsnap::TreeSnapshot;
use crate::ext::BestEffortPathExt;
use crate::filesnap::FlatSnapshot;
use crate::filesystem::{FileSystem, OsFileSystem};

const COMPRESSION_LEVEL: i32 = 3;

mod private {
    pub trait Sealed {}

    impl Sealed for crate::dirsnap::TreeSnapshot {}
    impl Sealed for crate::filesnap::FlatSnapshot {}
}

/// A snapshot type that can be archived.
pub trait Snapshot: Encode + Decode<()> + private::Sealed {}

impl Snapshot for TreeSnapshot {}
impl Snapshot for FlatSnapshot {}

pub fn encode<S: Snapshot>(snapshot: &S) -> Result<Vec<u8>, ArchiveError> {
    let config = bincode::config::standard();
    let encoded = bincode::encode_to_vec(snapshot, config).context(SerializeSnafu)?;
    zstd::encode_all(encoded.as_slice(), COMPRESSION_LEVEL).context(CompressSnafu)
}

pub fn decode<S: Snapshot>(bytes: &[u8]) -> Result<S, ArchiveError> {
    let decompressed = zstd::decode_all(bytes).context(DecompressSnafu)?;
    let config = bincode::config::standard();
    let (snapshot, read) =
        bincode::decode_from_slice::<S, _>(&decompressed, config).context(DeserializeSnafu)?;
    ensure!(
        read == decompressed.len(),
        TrailingBytesSnafu {
            count: decompressed.len() - read
        }
    );
    Ok(snapshot)
}

/// Saves an archive of `snapshot` at `path` on the live filesystem.
pub fn save<S: Snapshot>(snapshot: &S, path: impl AsRef<Path>) -> Result<(), ArchiveError> {
    save_fs(&OsFileSystem, snapshot, path)
}

/// Saves an archive of `snapshot` at `path`, creating missing parent directories.
pub fn save_fs<F: FileSystem + ?Sized, S: Snapshot>(
    fs: &F,
    snapshot: &S,
    path: impl AsRef<Path>,
) -> Result<(), ArchiveError> {
    let path = path.as_ref();
    let bytes = encode(snapshot)?;
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs.create_dir_all(parent)
            .context(WriteSnafu { path: parent })?;
    }
    fs.write_file(path, &bytes).context(WriteSnafu { path })?;
    debug!(
        "Saved {} byte archive to {}",
        bytes.len(),
        path.best_effort_path_display()
    );
    Ok(())
}

/// Loads an archive from `path` on the live filesystem.
pub fn load<S: Snapshot>(path: impl AsRef<Path>) -> Result<S, ArchiveError> {
    load_fs(&OsFileSystem, path)
}

pub fn load_fs<F: FileSystem + ?Sized, S: Snapshot>(
    fs: &F,
    path: impl AsRef<Path>,
) -> Result<S, ArchiveError> {
    let path = path.as_ref();
    debug!("Loading archive from {}", path.best_effort_path_display());
    let bytes = fs.read_file(path).context(ReadSnafu { path })?;
    decode(&bytes)
}

#[derive(Debug, Snafu)]
pub enum ArchiveError {
    #[snafu(display("Failed to encode snapshot"))]
    SerializeError { source: EncodeError },
    #[snafu(display("Failed to decode snapshot"))]
    DeserializeError { source: DecodeError },
    #[snafu(display("Failed to compress snapshot"))]
    CompressError { source: io::Error },
    #[snafu(display("Failed to decompress archive"))]
    DecompressError { source: io::Error },
    #[snafu(display("Archive has {} unexpected trailing bytes", count))]
    TrailingBytes { count: usize },
    #[snafu(display("Failed to write archive {}", path.best_effort_path_display()))]
    WriteError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read archive {}", path.best_effort_path_display()))]
    ReadError { path: PathBuf, source: io::Error },
}
