//! One-shot deadline timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Fires a callback once after a fixed duration unless stopped first.
///
/// Dropping the timer stops it, so a timer can never outlive the session
/// that armed it.
#[derive(Debug)]
pub struct DeadlineTimer {
    handle: JoinHandle<()>,
}

impl DeadlineTimer {
    /// Arm a timer that runs `on_fire` after `duration`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(duration: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            tracing::info!("deadline of {}s reached", duration.as_secs_f64());
            on_fire();
        });
        Self { handle }
    }

    /// Disarm the timer. A no-op if it already fired.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
