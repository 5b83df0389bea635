//! Controller configuration.
//!
//! Values are plain serde structs; every field has a default so partial documents deserialize.
//! Resource quantities stay raw strings here and are validated by [`crate::resources`].
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Scope used when no namespace is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Prefix of every derived workload name unless configured otherwise.
pub const DEFAULT_NAME_PREFIX: &str = "unit";

pub const KEY_NAMESPACE: &str = "namespace";
pub const KEY_REGISTRY_NAMESPACE: &str = "registry.namespace";
pub const KEY_REGISTRY_PREFIX: &str = "registry.prefix";
pub const KEY_LIMITS_CPU: &str = "container.limits.cpu";
pub const KEY_LIMITS_MEMORY: &str = "container.limits.memory";
pub const KEY_REQUESTS_CPU: &str = "container.requests.cpu";
pub const KEY_REQUESTS_MEMORY: &str = "container.requests.memory";

/// Read-only key lookup over configuration values.
///
/// Empty strings are reported as set; callers decide whether that means "absent".
pub trait ConfigLookup {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl ConfigLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ConfigLookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Top-level controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Whether the controller may talk to the orchestrator at all.
    pub enabled: bool,
    /// Target scope for every created or queried object.
    pub namespace: Option<String>,
    /// Owner on whose behalf units are scheduled. May be empty.
    pub owner_id: String,
    /// Leading component of every derived workload name.
    pub name_prefix: String,
    /// Image registry coordinates.
    pub registry: RegistryConfig,
    /// Optional container resource quantities.
    pub container: ContainerResourceConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            namespace: None,
            owner_id: String::new(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            registry: RegistryConfig::default(),
            container: ContainerResourceConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Namespace to operate in, falling back to [`DEFAULT_NAMESPACE`] with a warning.
    pub fn resolved_namespace(&self) -> String {
        match self.namespace.as_deref().map(str::trim) {
            Some(ns) if !ns.is_empty() => ns.to_string(),
            _ => {
                warn!(
                    namespace = DEFAULT_NAMESPACE,
                    "'{KEY_NAMESPACE}' not set, using default namespace"
                );
                DEFAULT_NAMESPACE.to_string()
            }
        }
    }
}

impl ConfigLookup for ControllerConfig {
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            KEY_NAMESPACE => self.namespace.as_deref(),
            KEY_REGISTRY_NAMESPACE => Some(&self.registry.namespace),
            KEY_REGISTRY_PREFIX => Some(&self.registry.prefix),
            other => self.container.lookup(other),
        }
    }
}

/// Image registry coordinates: images resolve to `<namespace>/<prefix>-<unit>:<version>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub namespace: String,
    pub prefix: String,
}

/// Container limits and requests, each quantity optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerResourceConfig {
    pub limits: QuantityConfig,
    pub requests: QuantityConfig,
}

/// Raw cpu / memory quantities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityConfig {
    pub cpu: Option<String>,
    pub memory: Option<String>,
}

impl ConfigLookup for ContainerResourceConfig {
    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            KEY_LIMITS_CPU => self.limits.cpu.as_deref(),
            KEY_LIMITS_MEMORY => self.limits.memory.as_deref(),
            KEY_REQUESTS_CPU => self.requests.cpu.as_deref(),
            KEY_REQUESTS_MEMORY => self.requests.memory.as_deref(),
            _ => None,
        }
    }
}
