use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use wlc_core::{BuildOutcome, MetricsBackend};

const NAMESPACE: &str = "wlc";

/// Prometheus metrics backend.
///
/// ## Metrics
/// - `wlc_unit_build_duration_seconds{unit, success}`: time spent in `start`
/// - `wlc_controller_errors_total{operation, error_kind}`: failed controller operations
///
/// `unit` is the unit name without version, `success` is `"true"` or `"false"`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    build_duration: HistogramVec,
    controller_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its collectors in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let build_duration = HistogramVec::new(
            HistogramOpts::new(
                "unit_build_duration_seconds",
                "Time to launch a unit workload in seconds",
            )
            .namespace(NAMESPACE)
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
            &["unit", "success"],
        )?;
        registry.register(Box::new(build_duration.clone()))?;

        let controller_errors = CounterVec::new(
            Opts::new(
                "controller_errors_total",
                "Total failed lifecycle controller operations",
            )
            .namespace(NAMESPACE),
            &["operation", "error_kind"],
        )?;
        registry.register(Box::new(controller_errors.clone()))?;

        Ok(Self {
            build_duration,
            controller_errors,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_build(&self, unit: &str, outcome: BuildOutcome, duration_ms: u64) {
        self.build_duration
            .with_label_values(&[unit, outcome.as_label()])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_controller_error(&self, operation: &str, error_kind: &str) {
        self.controller_errors
            .with_label_values(&[operation, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .expect("metric not found")
    }

    #[test]
    fn build_duration_is_labelled_by_unit_and_outcome() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_build("mycc", BuildOutcome::Success, 1500);
        metrics.record_build("mycc", BuildOutcome::Failure, 20);
        metrics.record_build("other", BuildOutcome::Success, 300);

        let families = metrics.gather();
        let builds = family(&families, "wlc_unit_build_duration_seconds");
        assert_eq!(builds.get_metric().len(), 3);

        let sample = metrics
            .build_duration
            .with_label_values(&["mycc", "true"]);
        assert_eq!(sample.get_sample_count(), 1);
        assert!((sample.get_sample_sum() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn controller_errors_count_per_operation_and_kind() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_controller_error("stop", "orchestrator");
        metrics.record_controller_error("stop", "orchestrator");
        metrics.record_controller_error("wait", "not_found");

        let families = metrics.gather();
        let errors = family(&families, "wlc_controller_errors_total");
        assert_eq!(errors.get_metric().len(), 2);
        assert_eq!(
            metrics
                .controller_errors
                .with_label_values(&["stop", "orchestrator"])
                .get(),
            2.0
        );
    }

    #[test]
    fn shared_registry_rejects_second_backend() {
        let registry = Arc::new(Registry::new());
        let metrics = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        metrics.record_build("mycc", BuildOutcome::Success, 10);
        assert!(!registry.gather().is_empty());
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }
}
