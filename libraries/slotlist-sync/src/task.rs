//! Repeating background work bound to an owner
//!
//! A [`ScheduledTask`] runs a [`PeriodicJob`] on a fixed interval until it
//! is stopped or dropped. Cancellation also interrupts a run in progress,
//! so no tick outlives the handle that started it.

use async_trait::async_trait;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Work executed on every tick of a [`ScheduledTask`]
#[async_trait]
pub trait PeriodicJob: Send + 'static {
    async fn run(&mut self);
}

/// Handle to a running interval task
///
/// Dropping the handle cancels the task.
pub struct ScheduledTask {
    name: String,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Spawn `job` on the current runtime, running it immediately and then
    /// every `period`
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn spawn<J: PeriodicJob>(name: impl Into<String>, period: Duration, mut job: J) -> Self {
        let name = name.into();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let task_name = name.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = cancelled.cancelled() => break,
                    _ = interval.tick() => {}
                }

                tokio::select! {
                    biased;
                    () = cancelled.cancelled() => break,
                    () = job.run() => {}
                }
            }

            debug!(task = %task_name, "Scheduled task stopped");
        });

        debug!(task = %name, period_ms = period.as_millis() as u64, "Scheduled task started");

        Self {
            name,
            token,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Request cancellation without waiting for the task to finish
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel the task and wait until it has exited
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(task = %self.name, error = %e, "Scheduled task ended abnormally");
            }
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
