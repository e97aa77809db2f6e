use std::path::Path;

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// Reads a fixture file to a string.
pub(super) fn read_fixture_file(path: &Path) -> Result<String, FixtureError> {
    debug!("Reading fixture file: {}", path.best_effort_path_display());
    std::fs::read_to_string(path).context(ReadSnafu {
        file_path: path.best_effort_path_display(),
    })
}

/// Parses `contents` and hands its top-level mapping to `build`.
pub(super) fn with_top_level<T>(
    contents: &str,
    build: impl FnOnce(&LinkedHashMap<Yaml<'_>, Yaml<'_>>) -> Result<T, FixtureError>,
) -> Result<T, FixtureError> {
    let documents =
        Yaml::load_from_str(contents).map_err(|e| FixtureError::ParseError { source: e })?;
    let document = documents.first().ok_or(FixtureError::MalformedFixture)?;
    let top_level = document.as_mapping().ok_or(FixtureError::TopLevelNotMap)?;
    build(top_level)
}

/// Returns the string form of a mapping key found below `parent`.
pub(super) fn key_str<'a>(key: &'a Yaml, parent: &str) -> Result<&'a str, FixtureError> {
    key.as_str().context(KeyNotStringSnafu { parent })
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum FixtureError {
    #[snafu(display("Failed to read the fixture file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the fixture"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted fixture"))]
    MalformedFixture,
    #[snafu(display("Top level of a fixture should be a map"))]
    TopLevelNotMap,
    #[snafu(display("A key below '{}' is not a string, quote it", parent))]
    KeyNotString { parent: String },
    #[snafu(display("'{}' is not a valid name for '{}'", name, kind))]
    InvalidName { name: String, kind: &'static str },
    #[snafu(display("Directory entry '{}' should be ~ for a file or a map for a directory", entry))]
    InvalidTreeEntry { entry: String },
    #[snafu(display("Contents of file '{}' should be a string or ~", path))]
    InvalidFileContents { path: String },
}
