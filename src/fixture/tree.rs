use std::path::Path;

use hashlink::LinkedHashMap;
use saphyr::{Scalar, Yaml};
use snafu::prelude::*;

use crate::dirsnap::{TreeEntry, TreeSnapshot};
use crate::ext::join_key;

use super::FixtureError;
use super::yaml::{
    InvalidNameSnafu, InvalidTreeEntrySnafu, key_str, read_fixture_file, with_top_level,
};

impl TreeSnapshot {
    /// Builds a tree snapshot from a YAML fixture. See [`crate::fixture`].
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        contents.try_into()
    }

    /// Reads and parses a YAML fixture file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        read_fixture_file(path.as_ref())?.as_str().try_into()
    }
}

impl TryFrom<&str> for TreeSnapshot {
    type Error = FixtureError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        with_top_level(contents, |top_level| tree_from_mapping(top_level, ""))
    }
}

fn tree_from_mapping(
    mapping: &LinkedHashMap<Yaml, Yaml>,
    parent: &str,
) -> Result<TreeSnapshot, FixtureError> {
    mapping
        .iter()
        .map(|(key, value)| -> Result<(String, TreeEntry), FixtureError> {
            let name = key_str(key, parent)?;
            ensure!(
                !name.is_empty() && !name.contains('/'),
                InvalidNameSnafu {
                    name,
                    kind: "a directory entry",
                }
            );
            let entry_path = join_key(parent, name);
            let entry = match value {
                Yaml::Value(Scalar::Null) => TreeEntry::File,
                Yaml::Mapping(children) => {
                    TreeEntry::Dir(tree_from_mapping(children, &entry_path)?)
                }
                _ => return InvalidTreeEntrySnafu { entry: entry_path }.fail(),
            };
            Ok((name.to_string(), entry))
        })
        .collect()
}
