//! Orchestrator-safe names derived from an owner and a unit descriptor.
//!
//! Derivation is pure and deterministic: the same inputs always give the same name, which is what
//! makes restart-by-name and label lookup idempotent.
use wlc_model::UnitDescriptor;

use crate::config::RegistryConfig;

/// Returns `true` for characters allowed in workload names: `[A-Za-z0-9-_.]`.
#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Replace every character outside `[A-Za-z0-9-_.]` with `-`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_name_char(c) { c } else { '-' })
        .collect()
}

/// Derive the workload name for `unit` scheduled on behalf of `owner`.
///
/// Format: `{prefix}-{owner}-{unit}` or `{prefix}-{unit}` when `owner` is empty,
/// where `unit` is [`UnitDescriptor::canonical_name`]. The result is sanitized.
pub fn derive_name(prefix: &str, owner: &str, unit: &UnitDescriptor) -> String {
    let name = if owner.is_empty() {
        format!("{prefix}-{}", unit.canonical_name())
    } else {
        format!("{prefix}-{owner}-{}", unit.canonical_name())
    };
    sanitize(&name)
}

/// Container image reference: `{namespace}/{prefix}-{unit name}:{unit version}`.
pub fn image_reference(registry: &RegistryConfig, unit: &UnitDescriptor) -> String {
    format!(
        "{}/{}-{}:{}",
        registry.namespace,
        registry.prefix,
        unit.name(),
        unit.version()
    )
}

/// Name of the single container inside a workload.
pub fn container_name(prefix: &str, unit: &UnitDescriptor) -> String {
    sanitize(&format!("{prefix}-{}", unit.name()))
}
