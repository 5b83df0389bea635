use thiserror::Error;

use crate::orchestrator::OrchestratorError;

/// Error returned by lifecycle controller operations.
///
/// Callers branch on the variant to decide their own retry policy; the controller never retries.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed configuration value; raised before the workload is created.
    #[error("configuration error for '{key}': {reason}")]
    Configuration { key: String, reason: String },

    /// No wait handle (or other lookup target) registered under this name.
    #[error("{0} not found")]
    NotFound(String),

    /// Failure reported by the orchestrator client, passed through unmodified.
    #[error("orchestrator error: {0}")]
    Orchestrator(#[from] OrchestratorError),

    /// Malformed file bundle. Packaging is currently best-effort, so nothing raises this yet.
    #[error("packaging error: {0}")]
    Packaging(String),
}

impl CoreError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Configuration { .. } => "configuration",
            CoreError::NotFound(_) => "not_found",
            CoreError::Orchestrator(_) => "orchestrator",
            CoreError::Packaging(_) => "packaging",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}
