//! # postfill-form — Host-Form Capability Layer
//!
//! The narrow interface between the autofill engine and whatever renders
//! the checkout form. The engine never touches a concrete DOM; it talks to
//! two traits:
//!
//! - [`Control`] — one editable form element: read its value, probe its
//!   native value setters, write through a chosen route, dispatch events,
//!   carry flags and classes, and accept edit bindings.
//! - [`FormHost`] — the surrounding document: resolve typed [`Selector`]s
//!   to controls, dispatch form-level events, and observe subtree mutations
//!   of the checkout container.
//!
//! Selectors are a typed enum rather than raw CSS strings, so non-DOM hosts
//! (and the [`fake`] test double) can match them structurally; a browser
//! host renders them with [`Selector::to_css`] and gets exactly the
//! conventional selector strings back.
//!
//! The engine is deliberately lenient toward the host: a control that
//! vanished, a selector that matches nothing, a missing checkout container —
//! none of these are errors on the engine side. Capability implementations
//! should uphold the same stance and never panic on unexpected form state.

pub mod control;
pub mod events;
pub mod host;
pub mod selector;

#[cfg(feature = "fake")]
pub mod fake;

pub use control::{
    Control, ControlKind, EditSink, SelectOption, SetterId, SetterProbe, WriteRoute,
};
pub use events::{ControlEvent, EditTrigger, FormEvent, HostNotification};
pub use host::{FormHost, MutationSink};
pub use selector::{Selector, TagFilter, COMPONENT_FORM_CLASS};
