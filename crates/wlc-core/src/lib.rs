//! Lifecycle control for short-lived unit workloads on a cluster orchestrator.
//!
//! The [`LifecycleController`] starts, stops and waits on workloads identified by an owner and a
//! [`wlc_model::UnitDescriptor`]. Everything it needs from the cluster goes through the
//! [`OrchestratorClient`] trait.
pub mod bundle;
pub mod config;
pub mod controller;
pub mod error;
pub mod identity;
pub mod metrics;
pub mod orchestrator;
pub mod probe;
pub mod registry;
pub mod resources;

pub use controller::{LifecycleController, StopOptions};
pub use error::CoreError;
pub use metrics::{BuildOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};
pub use orchestrator::{OrchestratorClient, OrchestratorError};

pub mod prelude {
    pub use crate::config::{ConfigLookup, ControllerConfig};
    pub use crate::controller::{LifecycleController, StopOptions};
    pub use crate::error::CoreError;
    pub use crate::metrics::{MetricsBackend, MetricsHandle};
    pub use crate::orchestrator::{
        MemoryOrchestrator, OrchestratorClient, OrchestratorError, TracedOrchestrator,
    };
    pub use crate::registry::{ExitSignal, WaitRegistry};
}
