use serde::{Deserialize, Serialize};

use crate::{FileBundle, Labels};

/// Named blob-store entry exposed to a running workload as a filesystem mount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactBundle {
    pub name: String,
    pub labels: Labels,
    /// Files relative to the mount point.
    pub data: FileBundle,
}

/// Reference to a stored artifact bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRef {
    pub name: String,
}
