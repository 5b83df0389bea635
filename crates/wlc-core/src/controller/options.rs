/// Options for [`super::LifecycleController::stop`].
///
/// Workloads cannot be stopped without being deleted, so either flag triggers an immediate
/// (zero grace period) deletion. With both unset, stop does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOptions {
    /// Terminate running instances.
    pub kill: bool,
    /// Remove instances and their artifact bundle.
    pub remove: bool,
}

impl StopOptions {
    /// Options that leave everything in place.
    pub const fn keep() -> Self {
        Self {
            kill: false,
            remove: false,
        }
    }

    /// Returns `true` if the stop request should tear anything down.
    pub const fn tears_down(&self) -> bool {
        self.kill || self.remove
    }
}

impl Default for StopOptions {
    fn default() -> Self {
        Self {
            kill: true,
            remove: true,
        }
    }
}
