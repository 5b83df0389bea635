use tokio_util::sync::CancellationToken;

/// One-shot, broadcast exit signal.
///
/// Clones share state. Firing is idempotent and wakes every current and future waiter exactly once;
/// there is no value to consume, so no waiter can steal the event from another.
#[derive(Debug, Clone, Default)]
pub struct ExitSignal {
    token: CancellationToken,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal. Later calls are no-ops.
    pub fn fire(&self) {
        self.token.cancel();
    }

    pub fn is_fired(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the signal fires. Returns immediately if it already has.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }
}
