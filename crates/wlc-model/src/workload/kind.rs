use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of object kinds the controller creates on the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    /// A running workload instance.
    Workload,
    /// A mounted artifact bundle holding uploaded files.
    ArtifactBundle,
}

impl ObjectKind {
    /// Returns the kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectKind::Workload => "workload",
            ObjectKind::ArtifactBundle => "artifact-bundle",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
