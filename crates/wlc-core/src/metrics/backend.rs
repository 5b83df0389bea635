use std::sync::Arc;

/// Outcome of a unit build (one `start` call).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failure,
}

impl BuildOutcome {
    /// Value of the `success` label.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            BuildOutcome::Success => "true",
            BuildOutcome::Failure => "false",
        }
    }
}

impl<T, E> From<&Result<T, E>> for BuildOutcome {
    fn from(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            BuildOutcome::Success
        } else {
            BuildOutcome::Failure
        }
    }
}

/// Metrics collection interface used by the controller.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record how long a unit build took and whether it succeeded.
    ///
    /// # Arguments
    /// - `unit`: unit name (not the derived workload name)
    /// - `outcome`: success or failure of the whole `start` call
    /// - `duration_ms`: wall time in milliseconds
    fn record_build(&self, unit: &str, outcome: BuildOutcome, duration_ms: u64);

    /// Record a controller operation that returned an error.
    ///
    /// # Arguments
    /// - `operation`: `start`, `stop` or `wait`
    /// - `error_kind`: [`crate::CoreError::kind`]
    fn record_controller_error(&self, operation: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;

#[cfg(test)]
mod tests {
    use super::BuildOutcome;

    #[test]
    fn outcome_from_result() {
        let ok: Result<(), ()> = Ok(());
        let err: Result<(), ()> = Err(());

        assert_eq!(BuildOutcome::from(&ok), BuildOutcome::Success);
        assert_eq!(BuildOutcome::from(&err), BuildOutcome::Failure);
        assert_eq!(BuildOutcome::Failure.as_label(), "false");
    }
}
