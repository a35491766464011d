//! # Form Host Capability
//!
//! The surrounding document, reduced to what the engine needs: selector
//! resolution, form-level event dispatch, and mutation observation of the
//! checkout container.

use std::sync::Arc;

use crate::control::Control;
use crate::events::FormEvent;
use crate::selector::Selector;

/// Callback invoked when the observed checkout container's subtree mutates.
pub type MutationSink = Arc<dyn Fn() + Send + Sync>;

/// The host document.
pub trait FormHost: Send + Sync {
    /// All controls matching the selector, in document order.
    fn find_controls(&self, selector: &Selector) -> Vec<Arc<dyn Control>>;

    /// First control matching the selector.
    fn find_control(&self, selector: &Selector) -> Option<Arc<dyn Control>> {
        self.find_controls(selector).into_iter().next()
    }

    /// Dispatch a bubbling form-level event on the document body.
    fn dispatch_form_event(&self, event: FormEvent);

    /// Start observing subtree mutations of the checkout container,
    /// delivering each batch to `sink`. Returns `false` when the host has
    /// no checkout container to observe (the engine then relies on its
    /// delayed re-check passes alone).
    fn observe_mutations(&self, sink: MutationSink) -> bool;
}
