//! # Lifecycle Watcher
//!
//! Checkout forms get torn down and rebuilt outside the engine's control:
//! AJAX update passes replace field markup, country changes re-render the
//! state field, and component-based checkouts render asynchronously after
//! page load. The watcher re-applies field wiring on every signal that the
//! form may have changed shape:
//!
//! - the initial pass at start;
//! - host notifications (checkout updated, country changed);
//! - observed DOM mutation inside the checkout container, coalesced with a
//!   trailing 500 ms debounce so churn storms re-wire once;
//! - fixed re-checks at 1 s and 2 s after start, catching renders that
//!   happen before the mutation observer is looking.
//!
//! Re-wiring is cheap and idempotent (see
//! [`crate::orchestrate::INIT_FLAG`]), so firing liberally is fine.

use std::sync::Arc;
use std::time::Duration;

use postfill_form::HostNotification;

use crate::orchestrate::AutofillEngine;
use crate::schedule::{Debouncer, Scheduler};

/// Trailing debounce applied to mutation-observer bursts.
pub const MUTATION_DEBOUNCE: Duration = Duration::from_millis(500);
/// Fallback re-check delays for frameworks that render after load.
pub const LATE_RENDER_RECHECKS: [Duration; 2] = [Duration::from_secs(1), Duration::from_secs(2)];

/// Re-applies engine wiring whenever the form may have been rebuilt.
pub struct LifecycleWatcher {
    engine: Arc<AutofillEngine>,
    scheduler: Arc<dyn Scheduler>,
    mutation_debounce: Arc<Debouncer>,
}

impl LifecycleWatcher {
    pub fn new(engine: Arc<AutofillEngine>, scheduler: Arc<dyn Scheduler>) -> Self {
        let mutation_debounce = Arc::new(Debouncer::new(Arc::clone(&scheduler), MUTATION_DEBOUNCE));
        Self {
            engine,
            scheduler,
            mutation_debounce,
        }
    }

    /// Run the initial wiring pass, register the mutation observer and
    /// schedule the late-render re-checks.
    pub fn start(&self) {
        self.engine.wire_all();

        let engine = Arc::clone(&self.engine);
        let debounce = Arc::clone(&self.mutation_debounce);
        let observing = self.engine.host().observe_mutations(Arc::new(move || {
            let engine = Arc::clone(&engine);
            debounce.call(Box::new(move || engine.wire_all()));
        }));
        if !observing {
            tracing::debug!("no checkout container to observe, relying on re-checks");
        }

        for delay in LATE_RENDER_RECHECKS {
            let engine = Arc::clone(&self.engine);
            let _ = self
                .scheduler
                .once(delay, Box::new(move || engine.wire_all()));
        }
    }

    /// Host-side notification that the form changed; re-wires immediately.
    pub fn notify(&self, notification: HostNotification) {
        tracing::debug!(event = notification.name(), "form change notification");
        self.engine.wire_all();
    }
}

impl std::fmt::Debug for LifecycleWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleWatcher")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
