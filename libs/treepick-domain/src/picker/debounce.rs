//! Cancellable delayed task used to debounce search input
//!
//! Each call to [`Debouncer::schedule`] aborts the task still waiting out
//! its quiet period and starts a new one. Once the delay elapses the action
//! is spawned as a task of its own, so a later input never cancels an
//! action that has already been dispatched.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Run `action` once the quiet period elapses without another schedule
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // aborting the timer from here on detaches the action instead
            if let Err(err) = tokio::spawn(action).await {
                if err.is_panic() {
                    warn!(error = %err, "Debounced action panicked");
                }
            }
        });

        if let Some(previous) = self.pending().replace(timer) {
            if !previous.is_finished() {
                debug!(delay_ms = delay.as_millis() as u64, "Rescheduling debounced action");
            }
            previous.abort();
        }
    }

    /// Drop the action waiting for its quiet period, if any
    ///
    /// An action already dispatched keeps running. Returns true when a
    /// scheduled action was still outstanding.
    pub fn cancel(&self) -> bool {
        match self.pending().take() {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    /// True while the last scheduled action is waiting or still running
    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .map(|timer| !timer.is_finished())
            .unwrap_or(false)
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.pending().take() {
            timer.abort();
        }
    }
}
