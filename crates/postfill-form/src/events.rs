//! # Event Vocabulary
//!
//! The event kinds crossing the engine/host boundary, in both directions.
//! Hosts translate these to and from their native event systems; the names
//! returned by the `name()` methods are the on-the-wire conventions.

/// An event the injector dispatches on a single control after writing a
/// value. All of these bubble, so ancestor listeners observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Native `input` event — what reactive frameworks subscribe to.
    Input,
    /// Native `change` event.
    Change,
    /// The DOM-helper-library change notification (`$(el).trigger("change")`)
    /// that classic checkout scripts listen for.
    LegacyChange,
}

impl ControlEvent {
    /// Native event name. The legacy notification reuses `change` but goes
    /// through the helper library's own dispatch path.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Change | Self::LegacyChange => "change",
        }
    }
}

/// A form-level event the engine dispatches on the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Ask the checkout to recalculate dependent state (totals, shipping,
    /// tax) after autofill wrote into its fields.
    UpdateCheckout,
}

impl FormEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateCheckout => "update_checkout",
        }
    }
}

/// A notification from the host that the form may have been rebuilt and
/// field wiring should be re-applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNotification {
    /// The checkout finished an AJAX update pass.
    CheckoutUpdated,
    /// The country selection changed, which re-renders the state field.
    CountryChanged,
}

impl HostNotification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckoutUpdated => "updated_checkout",
            Self::CountryChanged => "country_to_state_changed",
        }
    }
}

/// How a user edit reached a bound control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    /// Keystroke-style input.
    Edit,
    /// Clipboard paste. The pasted value lands in the control slightly
    /// after the event fires, so handling is re-checked on a short delay.
    Paste,
}
