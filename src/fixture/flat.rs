use std::path::Path;

use saphyr::{Scalar, Yaml};
use snafu::prelude::*;

use crate::filesnap::FlatSnapshot;

use super::FixtureError;
use super::yaml::{
    InvalidFileContentsSnafu, InvalidNameSnafu, key_str, read_fixture_file, with_top_level,
};

impl FlatSnapshot {
    /// Builds a file snapshot from a YAML fixture. See [`crate::fixture`].
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        contents.try_into()
    }

    /// Reads and parses a YAML fixture file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        read_fixture_file(path.as_ref())?.as_str().try_into()
    }
}

impl TryFrom<&str> for FlatSnapshot {
    type Error = FixtureError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        with_top_level(contents, |top_level| {
            top_level
                .iter()
                .map(|(key, value)| -> Result<(String, Vec<u8>), FixtureError> {
                    let path = key_str(key, "")?;
                    ensure!(
                        !path.is_empty() && !path.starts_with('/') && !path.ends_with('/'),
                        InvalidNameSnafu {
                            name: path,
                            kind: "a relative file path",
                        }
                    );
                    let contents = match value {
                        Yaml::Value(Scalar::Null) => Vec::new(),
                        _ => value
                            .as_str()
                            .context(InvalidFileContentsSnafu { path })?
                            .as_bytes()
                            .to_vec(),
                    };
                    Ok((path.to_string(), contents))
                })
                .collect()
        })
    }
}
