//! # Control Capability
//!
//! One editable form element, as the engine sees it. The trait models the
//! handful of operations autofill needs and nothing more: value access,
//! native-setter probing, routed writes, event dispatch, flags/classes, and
//! edit bindings.
//!
//! ## Setter probing
//!
//! Reactive UI frameworks commonly install their own `value` setter on the
//! element *instance*, shadowing the prototype's native setter, so they can
//! observe programmatic writes. A write that goes through the instance
//! setter is seen as framework-internal and may be swallowed; a write
//! through the *prototype* setter looks like a legitimate native mutation
//! and flows into the framework's change detection. [`SetterProbe`] reports
//! both setters (as opaque identities, so the engine can tell whether the
//! instance one shadows the prototype one) and the injector picks the
//! [`WriteRoute`] accordingly.

use std::sync::Arc;

use crate::events::{ControlEvent, EditTrigger};

/// What kind of control this is, as far as autofill cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Free-text entry.
    Text,
    /// Selectable list with fixed options.
    Select,
}

/// One option of a selectable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Display text shown to the shopper.
    pub label: String,
    /// Underlying submitted value.
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Opaque identity of a native value setter. Two equal ids mean the same
/// setter function; the numeric value carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetterId(pub u64);

/// Result of probing a control's value setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetterProbe {
    /// Setter installed on the instance itself, if any.
    pub instance: Option<SetterId>,
    /// Setter defined on the control's type prototype, if any.
    pub prototype: Option<SetterId>,
}

impl SetterProbe {
    /// A plain control: no instance-level override.
    pub fn plain() -> Self {
        Self {
            instance: None,
            prototype: Some(SetterId(1)),
        }
    }

    /// A framework-managed control: instance setter shadows the prototype's.
    pub fn framework_managed() -> Self {
        Self {
            instance: Some(SetterId(2)),
            prototype: Some(SetterId(1)),
        }
    }
}

/// Which mechanism a value write goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRoute {
    /// The type prototype's native setter, bypassing any instance override.
    Prototype,
    /// The instance's own setter.
    Instance,
    /// Plain property assignment.
    Direct,
}

/// Callback invoked when the user edits a bound control.
///
/// Hosts must deliver only genuine user edits through edit sinks — events
/// the engine itself dispatches via [`Control::dispatch`] stay one-way.
pub type EditSink = Arc<dyn Fn(EditTrigger) + Send + Sync>;

/// An editable form control.
pub trait Control: Send + Sync {
    /// The element id, used for component-form group inference. May be
    /// empty when the host form does not assign one.
    fn id(&self) -> String;

    /// Text or select.
    fn kind(&self) -> ControlKind;

    /// Current value.
    fn value(&self) -> String;

    /// Options of a selectable control, in declared order. Empty for text
    /// controls.
    fn options(&self) -> Vec<SelectOption>;

    /// Probe the control's value setters.
    fn setter_probe(&self) -> SetterProbe;

    /// Write a value through the given route.
    fn write(&self, route: WriteRoute, value: &str);

    /// Dispatch a bubbling control event.
    fn dispatch(&self, event: ControlEvent);

    /// Whether the named marker flag is set on the control.
    fn has_flag(&self, flag: &str) -> bool;

    /// Set a marker flag. Flags live on the control, so they disappear with
    /// it when the host rebuilds the form.
    fn set_flag(&self, flag: &str);

    /// Add a CSS class.
    fn add_class(&self, class: &str);

    /// Remove a CSS class.
    fn remove_class(&self, class: &str);

    /// Register a sink for user edits of this control.
    fn bind_edits(&self, sink: EditSink);
}
