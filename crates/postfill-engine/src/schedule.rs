//! # Scheduler
//!
//! The engine's timers, behind one narrow trait instead of ad hoc timer
//! calls scattered through the code: debounced postcode edits, paste
//! re-checks, highlight removal and the delayed re-wiring passes all go
//! through [`Scheduler::once`]. Tests drive a [`TokioScheduler`] under
//! paused virtual time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled task. Dropping the handle does not cancel the
/// task; only [`TaskHandle::cancel`] does.
pub trait TaskHandle: Send + Sync {
    fn cancel(&self);
}

/// One-shot task scheduling.
pub trait Scheduler: Send + Sync {
    /// Run `task` after `delay`. The returned handle cancels it if it has
    /// not fired yet.
    fn once(&self, delay: Duration, task: Task) -> Box<dyn TaskHandle>;
}

/// Tokio-backed scheduler. Must be used from within a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

struct TokioHandle(tokio::task::JoinHandle<()>);

impl TaskHandle for TokioHandle {
    fn cancel(&self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn once(&self, delay: Duration, task: Task) -> Box<dyn TaskHandle> {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(TokioHandle(handle))
    }
}

/// Trailing-edge debouncer: each [`Debouncer::call`] re-arms the delay and
/// cancels the previously pending task, so a burst of calls runs the task
/// once, after the burst goes quiet.
pub struct Debouncer {
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
    pending: Mutex<Option<Box<dyn TaskHandle>>>,
}

impl Debouncer {
    pub fn new(scheduler: Arc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` after the debounce delay, cancelling any pending
    /// predecessor.
    pub fn call(&self, task: Task) {
        if let Some(previous) = self.pending.lock().unwrap().take() {
            previous.cancel();
        }
        let handle = self.scheduler.once(self.delay, task);
        *self.pending.lock().unwrap() = Some(handle);
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
