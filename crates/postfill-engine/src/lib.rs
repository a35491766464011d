//! # postfill-engine — Checkout Autofill Engine
//!
//! Wires a checkout form's postcode fields to per-country lookup tables:
//! when the shopper enters a postcode, the engine resolves the city and
//! state fields and fills them, in a way both plain DOM listeners and
//! reactive-framework bindings observe.
//!
//! ## Components
//!
//! - [`locate`] — resolve a logical field (postcode, city, state, country)
//!   to a concrete control across several incompatible form conventions.
//! - [`matcher`] — match a canonical state name against a select control's
//!   options.
//! - [`inject`] — write values through the right native-setter route, fire
//!   the follow-up events, flash the highlight.
//! - [`orchestrate`] — [`AutofillEngine`]: debounced postcode wiring and
//!   the lookup-and-fill pipeline.
//! - [`lifecycle`] — [`LifecycleWatcher`]: re-apply wiring when the host
//!   rebuilds the form (AJAX updates, DOM mutation, late renders).
//! - [`schedule`] — the timer capability behind debouncing, paste
//!   re-checks, highlights and delayed re-wiring passes.
//!
//! Every failure mode here (field absent, country disabled, dataset
//! missing, postcode unknown, no option match) degrades to "nothing was
//! auto-filled" — the engine never surfaces an error to the shopper.

pub mod inject;
pub mod lifecycle;
pub mod locate;
pub mod matcher;
pub mod orchestrate;
pub mod schedule;

pub use lifecycle::LifecycleWatcher;
pub use orchestrate::AutofillEngine;
pub use schedule::{Debouncer, Scheduler, TaskHandle, TokioScheduler};
