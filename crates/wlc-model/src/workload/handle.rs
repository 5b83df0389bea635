use serde::{Deserialize, Serialize};

use crate::Labels;

/// Reference to a workload instance as reported by the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadHandle {
    pub name: String,
    pub labels: Labels,
}

impl WorkloadHandle {
    pub fn new(name: impl Into<String>, labels: Labels) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }
}
