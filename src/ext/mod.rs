mod best_effort_path_ext;
mod snapshot_path_ext;

pub use best_effort_path_ext::BestEffortPathExt;
pub use snapshot_path_ext::{SnapshotPathExt, join_key};
