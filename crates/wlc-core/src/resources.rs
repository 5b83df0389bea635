//! Resource limits and requests read from configuration.
use tracing::trace;
use wlc_model::{Quantity, ResourceKind, ResourceSpec};

use crate::{
    config::{
        ConfigLookup, KEY_LIMITS_CPU, KEY_LIMITS_MEMORY, KEY_REQUESTS_CPU, KEY_REQUESTS_MEMORY,
    },
    error::CoreError,
};

#[derive(Clone, Copy)]
enum Section {
    Limits,
    Requests,
}

/// Every configurable quantity, in lookup order.
const QUANTITY_KEYS: [(&str, Section, ResourceKind); 4] = [
    (KEY_LIMITS_CPU, Section::Limits, ResourceKind::Cpu),
    (KEY_LIMITS_MEMORY, Section::Limits, ResourceKind::Memory),
    (KEY_REQUESTS_CPU, Section::Requests, ResourceKind::Cpu),
    (KEY_REQUESTS_MEMORY, Section::Requests, ResourceKind::Memory),
];

/// Read an optional quantity; unset and empty values are both "not configured".
fn quantity_from_config(
    config: &impl ConfigLookup,
    key: &str,
) -> Result<Option<Quantity>, CoreError> {
    let Some(raw) = config.lookup(key).map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    Quantity::new(raw)
        .map(Some)
        .map_err(|e| CoreError::Configuration {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Build the container [`ResourceSpec`] from the four optional quantity keys.
///
/// Absent keys produce no entry. The first malformed value aborts with
/// [`CoreError::Configuration`] naming its key; no partial spec is returned.
pub fn build_resource_spec(config: &impl ConfigLookup) -> Result<ResourceSpec, CoreError> {
    let mut spec = ResourceSpec::new();

    for (key, section, kind) in QUANTITY_KEYS {
        let Some(qty) = quantity_from_config(config, key)? else {
            continue;
        };
        trace!(key, quantity = %qty, "resource quantity configured");

        match section {
            Section::Limits => spec.limits.insert(kind, qty),
            Section::Requests => spec.requests.insert(kind, qty),
        };
    }
    Ok(spec)
}
