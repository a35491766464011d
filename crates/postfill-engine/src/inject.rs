//! # Value Injector
//!
//! Writing into a host-form control so every listener sees it. The write
//! itself goes through a route picked from the control's setter probe, and
//! is followed by the `input`/`change` events reactive and classic
//! listeners subscribe to, plus the legacy helper-library notification.
//! The injected field flashes a highlight class for a moment — cosmetic
//! feedback that autofill touched it.

use std::sync::Arc;
use std::time::Duration;

use postfill_form::{Control, ControlEvent, SetterProbe, WriteRoute};

use crate::schedule::Scheduler;

/// Class carried by a just-autofilled control.
pub const HIGHLIGHT_CLASS: &str = "postfill-highlight";
/// How long the highlight stays on.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

/// Pick the write mechanism for a control.
///
/// An instance-level setter distinct from the prototype's means a reactive
/// framework intercepts programmatic writes; going through the prototype
/// setter makes the write look like a native mutation the framework's
/// change detection accepts. Otherwise the instance setter (where one
/// exists) is fine, and with no setter at all the value is assigned
/// directly.
pub fn choose_route(probe: SetterProbe) -> WriteRoute {
    match (probe.instance, probe.prototype) {
        (Some(instance), Some(prototype)) if instance != prototype => WriteRoute::Prototype,
        (Some(_), _) => WriteRoute::Instance,
        (None, _) => WriteRoute::Direct,
    }
}

/// Write `value` into `control` and notify every listener family.
pub fn inject(scheduler: &Arc<dyn Scheduler>, control: &Arc<dyn Control>, value: &str) {
    let route = choose_route(control.setter_probe());
    tracing::trace!(id = %control.id(), ?route, "injecting value");
    control.write(route, value);

    control.dispatch(ControlEvent::Input);
    control.dispatch(ControlEvent::Change);
    control.dispatch(ControlEvent::LegacyChange);

    highlight(scheduler, control);
}

fn highlight(scheduler: &Arc<dyn Scheduler>, control: &Arc<dyn Control>) {
    control.add_class(HIGHLIGHT_CLASS);
    let control = Arc::clone(control);
    let _ = scheduler.once(
        HIGHLIGHT_DURATION,
        Box::new(move || control.remove_class(HIGHLIGHT_CLASS)),
    );
}
