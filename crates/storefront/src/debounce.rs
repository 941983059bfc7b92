//! Trailing-edge debouncing for bursty inputs (e.g. search keystrokes).

use std::time::Duration;

use tokio::task::JoinHandle;

/// Default debounce delay.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Delays an action until `delay` has passed since the most recent call.
///
/// Each [`call`](Debouncer::call) aborts the previously pending action, so
/// only the last action in a burst runs. Dropping the debouncer cancels any
/// pending action.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the delay, cancelling any action still
    /// pending from an earlier call.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
