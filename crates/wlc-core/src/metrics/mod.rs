//! Metrics side channel for the lifecycle controller.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected into the
//! controller at construction. Recording never influences control flow.
mod backend;
pub use backend::{BuildOutcome, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
