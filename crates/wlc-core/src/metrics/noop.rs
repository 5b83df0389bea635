use crate::metrics::backend::{BuildOutcome, MetricsBackend};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_build(&self, _: &str, _: BuildOutcome, _: u64) {}

    #[inline(always)]
    fn record_controller_error(&self, _: &str, _: &str) {}
}
