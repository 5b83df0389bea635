use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Quantity,
    error::{ModelError, ModelResult},
};

/// Resource dimension a quantity applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Cpu,
    Memory,
}

impl ResourceKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Cpu => "cpu",
            ResourceKind::Memory => "memory",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(ResourceKind::Cpu),
            "memory" => Ok(ResourceKind::Memory),
            other => Err(ModelError::UnknownResourceKind(other.to_string())),
        }
    }
}

/// Limits and requests for a workload container.
///
/// A kind missing from a map means "no constraint"; it is never defaulted to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<ResourceKind, Quantity>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub requests: BTreeMap<ResourceKind, Quantity>,
}

impl ResourceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when neither limits nor requests are set.
    pub fn is_unconstrained(&self) -> bool {
        self.limits.is_empty() && self.requests.is_empty()
    }

    pub fn limit(&self, kind: ResourceKind) -> Option<&Quantity> {
        self.limits.get(&kind)
    }

    pub fn request(&self, kind: ResourceKind) -> Option<&Quantity> {
        self.requests.get(&kind)
    }
}
