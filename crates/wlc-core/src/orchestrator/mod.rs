//! Orchestrator client boundary.
//!
//! The controller never schedules anything itself: it composes descriptors and calls an
//! [`OrchestratorClient`]. Calls are fire-once; errors come back to the caller unmodified.
mod memory;
pub use memory::{MemoryOrchestrator, Operation, OrchestratorCall};

mod selector;
pub use selector::parse_selector;

mod traced;
pub use traced::TracedOrchestrator;

use async_trait::async_trait;
use thiserror::Error;
use wlc_model::{ArtifactBundle, BundleRef, ObjectKind, WorkloadDescriptor, WorkloadHandle};

/// Errors surfaced by an orchestrator client.
#[derive(Debug, Clone, Error)]
pub enum OrchestratorError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ObjectKind, name: String },

    #[error("{kind} '{name}' already exists")]
    Conflict { kind: ObjectKind, name: String },

    #[error("invalid label selector: {0}")]
    InvalidSelector(String),

    #[error("orchestrator unavailable: {0}")]
    Unavailable(String),

    #[error("orchestrator api error: {0}")]
    Api(String),
}

impl OrchestratorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrchestratorError::NotFound { .. })
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            OrchestratorError::NotFound { .. } => "not_found",
            OrchestratorError::Conflict { .. } => "conflict",
            OrchestratorError::InvalidSelector(_) => "invalid_selector",
            OrchestratorError::Unavailable(_) => "unavailable",
            OrchestratorError::Api(_) => "api",
        }
    }
}

/// Request/response API of the cluster orchestrator consumed by the controller.
///
/// Every call is scoped to a namespace. Implementations decide how to reach the cluster; the
/// controller only relies on the contract documented per method.
#[async_trait]
pub trait OrchestratorClient: Send + Sync + 'static {
    /// Create a workload. Fails with [`OrchestratorError::Conflict`] if the name is taken.
    async fn create_workload(
        &self,
        namespace: &str,
        descriptor: &WorkloadDescriptor,
    ) -> Result<WorkloadHandle, OrchestratorError>;

    /// Delete a workload by name. A zero grace period terminates immediately.
    async fn delete_workload(
        &self,
        namespace: &str,
        name: &str,
        grace_period_seconds: u32,
    ) -> Result<(), OrchestratorError>;

    /// List workloads whose labels match every `key=value` term of `selector`.
    async fn list_workloads(
        &self,
        namespace: &str,
        selector: &str,
    ) -> Result<Vec<WorkloadHandle>, OrchestratorError>;

    /// Store `bundle`, replacing an existing bundle carrying the same bundle key label.
    async fn create_or_update_bundle(
        &self,
        namespace: &str,
        bundle: &ArtifactBundle,
    ) -> Result<BundleRef, OrchestratorError>;

    /// Delete an artifact bundle by name.
    async fn delete_bundle(&self, namespace: &str, name: &str) -> Result<(), OrchestratorError>;
}
