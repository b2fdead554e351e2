//! Cancellable delayed execution (debounce)
//!
//! `schedule` arms a task to run after a delay on a tokio runtime handed in
//! explicitly. Arming again before it fires aborts the pending task, so only
//! the last scheduled task runs. A generation counter covers the window where
//! a superseded task's timer has already elapsed but the task has not been
//! polled yet. The counter is locked across check-and-run, so once
//! `schedule`/`cancel` returns no superseded task can start.

use crate::error::{GuideError, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct Debouncer {
    runtime: Handle,
    delay: Duration,
    /// Bumped on every schedule/cancel; a task only runs if it still holds the latest value
    generation: Arc<Mutex<u64>>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Debouncer spawning its timers on `runtime`. Scheduling works from
    /// synchronous code as long as that runtime is alive.
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        Self {
            runtime,
            delay,
            generation: Arc::new(Mutex::new(0)),
            pending: None,
        }
    }

    /// Debouncer bound to the runtime the caller is running on.
    pub fn on_current_runtime(delay: Duration) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| GuideError::NoRuntime(e.to_string()))?;
        Ok(Self::new(runtime, delay))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `task` after the configured delay unless superseded.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_after(self.delay, task);
    }

    /// Run `task` after `delay` unless superseded. A zero delay still goes
    /// through the runtime, so ordering with earlier tasks is kept.
    pub fn schedule_after<F>(&mut self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let ticket = self.supersede();
        let generation = Arc::clone(&self.generation);

        self.pending = Some(self.runtime.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let current = lock(&generation);
            if *current == ticket {
                task();
            }
        }));
    }

    /// Drop the pending task, if any. Blocks while a task is mid-run.
    pub fn cancel(&mut self) {
        self.supersede();
    }

    /// True while a scheduled task has neither run nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Invalidate and abort whatever is pending; returns the new generation.
    fn supersede(&mut self) -> u64 {
        let ticket = {
            let mut current = lock(&self.generation);
            *current += 1;
            *current
        };
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        ticket
    }
}

/// A task that panicked mid-run leaves the counter itself intact.
fn lock(generation: &Mutex<u64>) -> MutexGuard<'_, u64> {
    generation.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
