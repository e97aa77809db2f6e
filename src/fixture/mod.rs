//! Snapshots described as YAML documents.
//!
//! Tree fixtures map entry names to `~` (a file) or to a nested mapping (a
//! directory, `{}` when empty):
//!
//! ```yaml
//! file: ~
//! dir:
//!   subfile: ~
//!   subdir: {}
//! ```
//!
//! Flat fixtures map slash-joined paths to file contents, `~` being an empty
//! file:
//!
//! ```yaml
//! a.txt: prefix
//! nested/b.txt: |
//!   multi
//!   line
//! empty: ~
//! ```

mod flat;
mod tree;
mod yaml;

pub use yaml::FixtureError;
