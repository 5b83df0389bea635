//! Registry of exit signals keyed by workload name.
//!
//! A single mutex guards the map. It is held only for the map operation itself and never
//! while a caller awaits a signal.
mod signal;
pub use signal::ExitSignal;

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

/// Concurrency-safe `name → ExitSignal` map owned by one controller.
#[derive(Debug, Default)]
pub struct WaitRegistry {
    signals: Mutex<HashMap<String, ExitSignal>>,
}

impl WaitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, ExitSignal>> {
        self.signals.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `signal` under `name`, returning the entry it replaced.
    ///
    /// The replaced signal is not fired here; that is up to the caller.
    pub fn register(&self, name: impl Into<String>, signal: ExitSignal) -> Option<ExitSignal> {
        self.entries().insert(name.into(), signal)
    }

    /// Current signal for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<ExitSignal> {
        self.entries().get(name).cloned()
    }

    /// Remove and return the signal for `name`. Safe to call when absent.
    pub fn remove(&self, name: &str) -> Option<ExitSignal> {
        self.entries().remove(name)
    }

    /// Remove the entry for `name` and fire it.
    ///
    /// Removal happens first, so concurrent callers cannot fire the same entry twice.
    /// Returns `true` if an entry was present.
    pub fn release(&self, name: &str) -> bool {
        match self.remove(name) {
            Some(signal) => {
                signal.fire();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
