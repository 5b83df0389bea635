use std::time::Instant;

use async_trait::async_trait;
use tracing::{Instrument, debug, info, info_span, warn};
use wlc_model::{ArtifactBundle, BundleRef, WorkloadDescriptor, WorkloadHandle};

use super::{OrchestratorClient, OrchestratorError};

/// Wrapper that logs every call of an inner [`OrchestratorClient`] with its latency and outcome.
#[derive(Clone)]
pub struct TracedOrchestrator<C> {
    inner: C,
}

impl<C> TracedOrchestrator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

fn report<T>(result: &Result<T, OrchestratorError>, started: Instant, what: &str) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => debug!(elapsed_ms, "{what} succeeded"),
        // a missing object is routine during teardown
        Err(e) if e.is_not_found() => info!(elapsed_ms, error = %e, "{what}: not found"),
        Err(e) => warn!(elapsed_ms, error = %e, "{what} failed"),
    }
}

#[async_trait]
impl<C: OrchestratorClient> OrchestratorClient for TracedOrchestrator<C> {
    async fn create_workload(
        &self,
        namespace: &str,
        descriptor: &WorkloadDescriptor,
    ) -> Result<WorkloadHandle, OrchestratorError> {
        let span = info_span!("orchestrator.create_workload", namespace, name = %descriptor.name);
        async {
            let started = Instant::now();
            let result = self.inner.create_workload(namespace, descriptor).await;
            report(&result, started, "create workload");
            result
        }
        .instrument(span)
        .await
    }

    async fn delete_workload(
        &self,
        namespace: &str,
        name: &str,
        grace_period_seconds: u32,
    ) -> Result<(), OrchestratorError> {
        let span = info_span!("orchestrator.delete_workload", namespace, name, grace_period_seconds);
        async {
            let started = Instant::now();
            let result = self
                .inner
                .delete_workload(namespace, name, grace_period_seconds)
                .await;
            report(&result, started, "delete workload");
            result
        }
        .instrument(span)
        .await
    }

    async fn list_workloads(
        &self,
        namespace: &str,
        selector: &str,
    ) -> Result<Vec<WorkloadHandle>, OrchestratorError> {
        let span = info_span!("orchestrator.list_workloads", namespace, selector);
        async {
            let started = Instant::now();
            let result = self.inner.list_workloads(namespace, selector).await;
            if let Ok(found) = &result {
                debug!(count = found.len(), "workloads listed");
            }
            report(&result, started, "list workloads");
            result
        }
        .instrument(span)
        .await
    }

    async fn create_or_update_bundle(
        &self,
        namespace: &str,
        bundle: &ArtifactBundle,
    ) -> Result<BundleRef, OrchestratorError> {
        let span = info_span!(
            "orchestrator.create_or_update_bundle",
            namespace,
            name = %bundle.name,
            files = bundle.data.len(),
            bytes = bundle.data.total_bytes(),
        );
        async {
            let started = Instant::now();
            let result = self.inner.create_or_update_bundle(namespace, bundle).await;
            report(&result, started, "store bundle");
            result
        }
        .instrument(span)
        .await
    }

    async fn delete_bundle(&self, namespace: &str, name: &str) -> Result<(), OrchestratorError> {
        let span = info_span!("orchestrator.delete_bundle", namespace, name);
        async {
            let started = Instant::now();
            let result = self.inner.delete_bundle(namespace, name).await;
            report(&result, started, "delete bundle");
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{MemoryOrchestrator, OrchestratorCall};

    #[tokio::test]
    async fn delegates_to_inner_client() {
        let memory = MemoryOrchestrator::new();
        let traced = TracedOrchestrator::new(memory.clone());

        let found = traced.list_workloads("ns", "owner=p0").await.unwrap();
        assert!(found.is_empty());

        let err = traced.delete_bundle("ns", "missing").await.unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(
            memory.calls(),
            vec![
                OrchestratorCall::ListWorkloads {
                    namespace: "ns".into(),
                    selector: "owner=p0".into(),
                },
                OrchestratorCall::DeleteBundle {
                    namespace: "ns".into(),
                    name: "missing".into(),
                },
            ]
        );
    }
}
