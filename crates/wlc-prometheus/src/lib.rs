//! Prometheus backend for the lifecycle controller metrics.
//!
//! [`PrometheusMetrics`] implements [`wlc_core::MetricsBackend`]; inject it with
//! [`wlc_core::LifecycleController::with_metrics`].
//!
//! ```rust
//! use std::sync::Arc;
//! use wlc_core::{LifecycleController, config::ControllerConfig, orchestrator::MemoryOrchestrator};
//! use wlc_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let controller = LifecycleController::new(MemoryOrchestrator::new(), ControllerConfig::default())
//!     .with_metrics(Arc::new(metrics.clone()));
//! # let _ = controller;
//!
//! let families = metrics.gather();
//! # let _ = families;
//! # Ok(())
//! # }
//! ```
//!
//! No `/metrics` endpoint is served; encode [`PrometheusMetrics::gather`] with
//! `prometheus::TextEncoder` in whatever server the host process already runs.
mod backend;
pub use backend::PrometheusMetrics;
