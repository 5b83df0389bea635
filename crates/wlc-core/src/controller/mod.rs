//! Lifecycle controller: start, stop and wait on unit workloads.
//!
//! Per derived workload name the lifecycle is `Absent → Starting → Running → Stopping → Absent`.
//! The orchestrator is the source of truth for running instances; the only in-process state is
//! the [`WaitRegistry`] of exit signals.
pub mod descriptor;

mod options;
pub use options::StopOptions;

use std::time::Instant;

use tracing::{debug, error, info, instrument, trace, warn};
use wlc_model::{ArtifactBundle, Env, FileBundle, UnitDescriptor, WorkloadHandle};

use crate::{
    bundle,
    config::ControllerConfig,
    error::CoreError,
    identity,
    metrics::{BuildOutcome, MetricsHandle, noop_metrics},
    orchestrator::{OrchestratorClient, OrchestratorError},
    registry::{ExitSignal, WaitRegistry},
    resources,
};
use descriptor::{BundleMount, DescriptorInput};

/// Grace period used for every deletion: terminate immediately, no drain window.
pub const IMMEDIATE_GRACE_PERIOD: u32 = 0;

/// Exit code reported by [`LifecycleController::wait`].
///
/// Exit codes of remote workloads are not observed, so this is always returned.
pub const UNKNOWN_EXIT_CODE: i32 = 0;

/// Starts, stops and waits on unit workloads for one owner.
///
/// Operations on different workload names run concurrently without coordination; races on the
/// same name are resolved by the orchestrator (conflict / not found) and surfaced as-is.
pub struct LifecycleController<C> {
    client: C,
    config: ControllerConfig,
    namespace: String,
    registry: WaitRegistry,
    metrics: MetricsHandle,
}

impl<C: OrchestratorClient> LifecycleController<C> {
    /// Create a controller with its own, empty wait registry and no-op metrics.
    pub fn new(client: C, config: ControllerConfig) -> Self {
        let namespace = config.resolved_namespace();
        Self {
            client,
            config,
            namespace,
            registry: WaitRegistry::new(),
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend and return updated controller.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn owner(&self) -> &str {
        &self.config.owner_id
    }

    pub fn registry(&self) -> &WaitRegistry {
        &self.registry
    }

    /// Derived workload name of `unit` for this controller's owner.
    pub fn workload_name(&self, unit: &UnitDescriptor) -> String {
        identity::derive_name(&self.config.name_prefix, self.owner(), unit)
    }

    /// Instances of `unit` currently known to the orchestrator. Never cached.
    pub async fn running_instances(
        &self,
        unit: &UnitDescriptor,
    ) -> Result<Vec<WorkloadHandle>, CoreError> {
        let selector = descriptor::instance_labels(self.owner(), unit).to_selector();
        Ok(self.client.list_workloads(&self.namespace, &selector).await?)
    }

    /// Start `unit`, replacing any instance that is already running under the same name.
    ///
    /// `env` entries are `KEY=VALUE` strings split on the first `=`. `files` are packaged into an
    /// artifact bundle mounted at their common root (see [`descriptor::mount_path`]). Failure to
    /// tear down a previous instance is logged and does not abort the start. If create fails, the
    /// freshly uploaded bundle is removed again unless another instance still holds the name.
    #[instrument(level = "debug", skip(self, unit, args, env, files), fields(unit = %unit))]
    pub async fn start(
        &self,
        unit: &UnitDescriptor,
        args: &[String],
        env: &[String],
        files: FileBundle,
    ) -> Result<WorkloadHandle, CoreError> {
        let started = Instant::now();
        let result = self.start_workload(unit, args, env, files).await;

        self.metrics.record_build(
            unit.name(),
            BuildOutcome::from(&result),
            started.elapsed().as_millis() as u64,
        );
        if let Err(e) = &result {
            error!(error = %e, "cannot start unit");
            self.metrics.record_controller_error("start", e.kind());
        }
        result
    }

    async fn start_workload(
        &self,
        unit: &UnitDescriptor,
        args: &[String],
        env: &[String],
        files: FileBundle,
    ) -> Result<WorkloadHandle, CoreError> {
        let name = self.workload_name(unit);
        info!(workload = %name, namespace = %self.namespace, "starting unit");

        // teardown must finish before create to avoid a duplicate-name conflict
        if let Err(e) = self.teardown(unit, &name).await {
            warn!(workload = %name, error = %e, "cleanup of previous instances failed, continuing");
        }

        let packaged = bundle::package(files);
        let resources = resources::build_resource_spec(&self.config.container)?;

        let mount = if packaged.files.is_empty() {
            None
        } else {
            let artifact = ArtifactBundle {
                name: name.clone(),
                labels: descriptor::bundle_labels(self.owner(), &name),
                data: packaged.files,
            };
            let stored = self
                .client
                .create_or_update_bundle(&self.namespace, &artifact)
                .await?;
            Some(BundleMount {
                bundle: stored.name,
                path: packaged.mount_point,
            })
        };

        let uploaded = mount.as_ref().map(|m| m.bundle.clone());
        let env = Env::from_assignments(env);
        for kv in env.iter() {
            trace!(key = kv.key(), "workload env");
        }

        let desc = descriptor::assemble(
            &self.config,
            DescriptorInput {
                name: &name,
                unit,
                args,
                env,
                mount,
                resources,
            },
        );
        let handle = match self.client.create_workload(&self.namespace, &desc).await {
            Ok(handle) => handle,
            Err(e) => {
                // on conflict the bundle is still mounted by the instance holding the name
                let orphaned =
                    uploaded.filter(|_| !matches!(e, OrchestratorError::Conflict { .. }));
                if let Some(bundle) = orphaned {
                    self.discard_bundle(&bundle).await;
                }
                return Err(e.into());
            }
        };

        if let Some(previous) = self.registry.register(name.clone(), ExitSignal::new()) {
            debug!(workload = %name, "replacing stale exit signal");
            previous.fire();
        }
        info!(workload = %handle.name, "unit started");
        Ok(handle)
    }

    /// Stop `unit`: delete its running instances, release their waiters and remove the bundle.
    ///
    /// Deletion is eager-fail: the first failed delete is returned and later instances are not
    /// attempted. A waiter is released only once its instance is deleted.
    #[instrument(level = "debug", skip(self, unit), fields(unit = %unit))]
    pub async fn stop(&self, unit: &UnitDescriptor, opts: StopOptions) -> Result<(), CoreError> {
        let name = self.workload_name(unit);
        info!(workload = %name, kill = opts.kill, remove = opts.remove, "stop requested");

        if !opts.tears_down() {
            debug!(workload = %name, "nothing to tear down");
            return Ok(());
        }

        let result = self.teardown(unit, &name).await;
        if let Err(e) = &result {
            error!(workload = %name, error = %e, "cannot stop unit");
            self.metrics.record_controller_error("stop", e.kind());
        }
        result
    }

    async fn discard_bundle(&self, bundle: &str) {
        match self.client.delete_bundle(&self.namespace, bundle).await {
            Ok(()) => debug!(bundle, "removed bundle of failed start"),
            Err(e) if e.is_not_found() => {}
            Err(e) => warn!(bundle, error = %e, "cannot remove bundle of failed start"),
        }
    }

    async fn teardown(&self, unit: &UnitDescriptor, name: &str) -> Result<(), CoreError> {
        let instances = self.running_instances(unit).await?;

        for instance in instances {
            info!(workload = %instance.name, "removing workload instance");
            self.client
                .delete_workload(&self.namespace, &instance.name, IMMEDIATE_GRACE_PERIOD)
                .await?;

            if self.registry.release(&instance.name) {
                debug!(workload = %instance.name, "exit signal released");
            }
        }

        // the instance may have vanished on its own; its waiters still need releasing
        if self.registry.release(name) {
            debug!(workload = %name, "exit signal released without a running instance");
        }

        match self.client.delete_bundle(&self.namespace, name).await {
            Err(e) if !e.is_not_found() => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Block until the workload of `unit` is torn down by this controller.
    ///
    /// Fails immediately with [`CoreError::NotFound`] if nothing is registered. Holds no lock
    /// while waiting; callers wanting a deadline wrap this call in their own timeout.
    #[instrument(level = "debug", skip(self, unit), fields(unit = %unit))]
    pub async fn wait(&self, unit: &UnitDescriptor) -> Result<i32, CoreError> {
        let name = self.workload_name(unit);

        let Some(signal) = self.registry.lookup(&name) else {
            error!(workload = %name, "exit signal not found");
            self.metrics.record_controller_error("wait", "not_found");
            return Err(CoreError::NotFound(name));
        };

        info!(workload = %name, "waiting for workload to exit");
        signal.wait().await;
        info!(workload = %name, "workload exited");

        Ok(UNKNOWN_EXIT_CODE)
    }

    /// Liveness check. Always succeeds.
    pub async fn health_check(&self) -> Result<(), CoreError> {
        trace!("health check");
        Ok(())
    }
}
