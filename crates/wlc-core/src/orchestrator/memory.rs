//! In-memory orchestrator.
//!
//! Keeps workloads and bundles in process memory and honours the full client contract
//! (conflicts, not-found, label selection, update-if-exists). Every call is recorded and
//! failures can be injected per operation, which makes it the backend of choice for tests and
//! dry runs.
use std::{
    collections::{BTreeMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use wlc_model::{
    ArtifactBundle, BundleRef, LABEL_BUNDLE, ObjectKind, WorkloadDescriptor, WorkloadHandle,
};

use super::{OrchestratorClient, OrchestratorError, parse_selector};

/// Client operation, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateWorkload,
    DeleteWorkload,
    ListWorkloads,
    CreateOrUpdateBundle,
    DeleteBundle,
}

/// Recorded client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorCall {
    CreateWorkload {
        namespace: String,
        name: String,
    },
    DeleteWorkload {
        namespace: String,
        name: String,
        grace_period_seconds: u32,
    },
    ListWorkloads {
        namespace: String,
        selector: String,
    },
    CreateOrUpdateBundle {
        namespace: String,
        name: String,
        updated: bool,
    },
    DeleteBundle {
        namespace: String,
        name: String,
    },
}

type Key = (String, String);

fn key(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), name.to_string())
}

#[derive(Default)]
struct MemoryState {
    workloads: BTreeMap<Key, WorkloadDescriptor>,
    bundles: BTreeMap<Key, ArtifactBundle>,
    calls: Vec<OrchestratorCall>,
    failures: VecDeque<(Operation, OrchestratorError)>,
}

impl MemoryState {
    /// Pop the first injected failure for `op`, if any.
    fn take_failure(&mut self, op: Operation) -> Result<(), OrchestratorError> {
        match self.failures.iter().position(|(o, _)| *o == op) {
            Some(idx) => match self.failures.remove(idx) {
                Some((_, err)) => Err(err),
                None => Ok(()),
            },
            None => Ok(()),
        }
    }
}

/// Orchestrator that lives entirely in process memory.
///
/// Clones share state.
#[derive(Clone, Default)]
pub struct MemoryOrchestrator {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make the next call of `op` fail with `err`. Injections for one operation queue up.
    pub fn fail_next(&self, op: Operation, err: OrchestratorError) {
        self.state().failures.push_back((op, err));
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<OrchestratorCall> {
        self.state().calls.clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// All workloads currently stored in `namespace`.
    pub fn workloads(&self, namespace: &str) -> Vec<WorkloadDescriptor> {
        self.state()
            .workloads
            .iter()
            .filter(|((ns, _), _)| ns == namespace)
            .map(|(_, w)| w.clone())
            .collect()
    }

    pub fn workload(&self, namespace: &str, name: &str) -> Option<WorkloadDescriptor> {
        self.state().workloads.get(&key(namespace, name)).cloned()
    }

    pub fn bundle(&self, namespace: &str, name: &str) -> Option<ArtifactBundle> {
        self.state().bundles.get(&key(namespace, name)).cloned()
    }

    /// Drop a workload without going through the client API, as if it vanished on its own.
    pub fn terminate(&self, namespace: &str, name: &str) -> bool {
        self.state()
            .workloads
            .remove(&key(namespace, name))
            .is_some()
    }

    /// Store a workload directly, bypassing conflict checks and call recording.
    pub fn seed_workload(&self, namespace: &str, descriptor: WorkloadDescriptor) {
        self.state()
            .workloads
            .insert(key(namespace, &descriptor.name), descriptor);
    }
}

#[async_trait]
impl OrchestratorClient for MemoryOrchestrator {
    async fn create_workload(
        &self,
        namespace: &str,
        descriptor: &WorkloadDescriptor,
    ) -> Result<WorkloadHandle, OrchestratorError> {
        let mut state = self.state();
        state.calls.push(OrchestratorCall::CreateWorkload {
            namespace: namespace.to_string(),
            name: descriptor.name.clone(),
        });
        state.take_failure(Operation::CreateWorkload)?;

        let k = key(namespace, &descriptor.name);
        if state.workloads.contains_key(&k) {
            return Err(OrchestratorError::Conflict {
                kind: ObjectKind::Workload,
                name: descriptor.name.clone(),
            });
        }
        state.workloads.insert(k, descriptor.clone());

        Ok(WorkloadHandle::new(
            descriptor.name.clone(),
            descriptor.labels.clone(),
        ))
    }

    async fn delete_workload(
        &self,
        namespace: &str,
        name: &str,
        grace_period_seconds: u32,
    ) -> Result<(), OrchestratorError> {
        let mut state = self.state();
        state.calls.push(OrchestratorCall::DeleteWorkload {
            namespace: namespace.to_string(),
            name: name.to_string(),
            grace_period_seconds,
        });
        state.take_failure(Operation::DeleteWorkload)?;

        match state.workloads.remove(&key(namespace, name)) {
            Some(_) => Ok(()),
            None => Err(OrchestratorError::NotFound {
                kind: ObjectKind::Workload,
                name: name.to_string(),
            }),
        }
    }

    async fn list_workloads(
        &self,
        namespace: &str,
        selector: &str,
    ) -> Result<Vec<WorkloadHandle>, OrchestratorError> {
        let mut state = self.state();
        state.calls.push(OrchestratorCall::ListWorkloads {
            namespace: namespace.to_string(),
            selector: selector.to_string(),
        });
        state.take_failure(Operation::ListWorkloads)?;

        let wanted = parse_selector(selector)?;
        Ok(state
            .workloads
            .iter()
            .filter(|((ns, _), w)| ns == namespace && w.labels.matches(&wanted))
            .map(|(_, w)| WorkloadHandle::new(w.name.clone(), w.labels.clone()))
            .collect())
    }

    async fn create_or_update_bundle(
        &self,
        namespace: &str,
        bundle: &ArtifactBundle,
    ) -> Result<BundleRef, OrchestratorError> {
        let mut state = self.state();

        let existing = bundle.labels.get(LABEL_BUNDLE).and_then(|bundle_key| {
            state
                .bundles
                .iter()
                .find(|((ns, _), b)| ns == namespace && b.labels.get(LABEL_BUNDLE) == Some(bundle_key))
                .map(|(k, _)| k.clone())
        });

        state.calls.push(OrchestratorCall::CreateOrUpdateBundle {
            namespace: namespace.to_string(),
            name: bundle.name.clone(),
            updated: existing.is_some(),
        });
        state.take_failure(Operation::CreateOrUpdateBundle)?;

        if let Some(k) = existing {
            state.bundles.remove(&k);
        }
        state
            .bundles
            .insert(key(namespace, &bundle.name), bundle.clone());

        Ok(BundleRef {
            name: bundle.name.clone(),
        })
    }

    async fn delete_bundle(&self, namespace: &str, name: &str) -> Result<(), OrchestratorError> {
        let mut state = self.state();
        state.calls.push(OrchestratorCall::DeleteBundle {
            namespace: namespace.to_string(),
            name: name.to_string(),
        });
        state.take_failure(Operation::DeleteBundle)?;

        match state.bundles.remove(&key(namespace, name)) {
            Some(_) => Ok(()),
            None => Err(OrchestratorError::NotFound {
                kind: ObjectKind::ArtifactBundle,
                name: name.to_string(),
            }),
        }
    }
}
