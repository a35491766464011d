//! # In-Memory Fake Host
//!
//! A scripted [`FormHost`]/[`Control`] implementation for tests. Controls
//! are matched against [`Selector`]s structurally (no CSS engine), user
//! edits are simulated by calling [`FakeControl::user_edit`] /
//! [`FakeControl::user_paste`], and every write, event and class change is
//! recorded for assertions.
//!
//! The fake enforces the host contract that matters most to the engine:
//! events dispatched *by* the engine through [`Control::dispatch`] are only
//! recorded — they are never fed back into edit sinks. Only scripted user
//! edits reach the sinks.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::control::{
    Control, ControlKind, EditSink, SelectOption, SetterProbe, WriteRoute,
};
use crate::events::{ControlEvent, EditTrigger, FormEvent};
use crate::host::{FormHost, MutationSink};
use crate::selector::{Selector, TagFilter};

#[derive(Debug, Default)]
struct ControlState {
    value: String,
    classes: BTreeSet<String>,
    flags: BTreeSet<String>,
    writes: Vec<(WriteRoute, String)>,
    events: Vec<ControlEvent>,
}

/// A scripted form control.
pub struct FakeControl {
    id: String,
    name: String,
    kind: ControlKind,
    options: Vec<SelectOption>,
    autocomplete: Option<String>,
    in_component_form: bool,
    ancestor_ids: Vec<String>,
    probe: SetterProbe,
    state: Mutex<ControlState>,
    sinks: Mutex<Vec<EditSink>>,
}

impl FakeControl {
    /// A text control. The name attribute defaults to the id.
    pub fn text(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind: ControlKind::Text,
            options: Vec::new(),
            autocomplete: None,
            in_component_form: false,
            ancestor_ids: Vec::new(),
            probe: SetterProbe::plain(),
            state: Mutex::new(ControlState::default()),
            sinks: Mutex::new(Vec::new()),
        }
    }

    /// A select control with the given options.
    pub fn select(id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            kind: ControlKind::Select,
            options,
            ..Self::text(id)
        }
    }

    /// Override the name attribute.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Annotate with an `autocomplete` attribute.
    pub fn with_autocomplete(mut self, value: impl Into<String>) -> Self {
        self.autocomplete = Some(value.into());
        self
    }

    /// Place the control inside the component-based address form.
    pub fn in_component_form(mut self) -> Self {
        self.in_component_form = true;
        self
    }

    /// Give the control an ancestor with the given id.
    pub fn within(mut self, ancestor_id: impl Into<String>) -> Self {
        self.ancestor_ids.push(ancestor_id.into());
        self
    }

    /// Override the setter probe (defaults to [`SetterProbe::plain`]).
    pub fn with_probe(mut self, probe: SetterProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Seed an initial value without firing any bindings.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.state.lock().unwrap().value = value.into();
        self
    }

    fn fire(&self, trigger: EditTrigger) {
        let sinks: Vec<EditSink> = self.sinks.lock().unwrap().clone();
        for sink in sinks {
            sink(trigger);
        }
    }

    /// Simulate the user typing: set the value, then fire edit sinks.
    pub fn user_edit(&self, text: &str) {
        self.state.lock().unwrap().value = text.to_string();
        self.fire(EditTrigger::Edit);
    }

    /// Simulate a clipboard paste.
    pub fn user_paste(&self, text: &str) {
        self.state.lock().unwrap().value = text.to_string();
        self.fire(EditTrigger::Paste);
    }

    /// Every write performed through [`Control::write`], in order.
    pub fn writes(&self) -> Vec<(WriteRoute, String)> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Every event dispatched through [`Control::dispatch`], in order.
    pub fn dispatched(&self) -> Vec<ControlEvent> {
        self.state.lock().unwrap().events.clone()
    }

    /// Whether the control currently carries the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.state.lock().unwrap().classes.contains(class)
    }

    /// Number of edit sinks bound to this control.
    pub fn edit_sink_count(&self) -> usize {
        self.sinks.lock().unwrap().len()
    }
}

impl Control for FakeControl {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn value(&self) -> String {
        self.state.lock().unwrap().value.clone()
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.clone()
    }

    fn setter_probe(&self) -> SetterProbe {
        self.probe
    }

    fn write(&self, route: WriteRoute, value: &str) {
        let mut state = self.state.lock().unwrap();
        state.writes.push((route, value.to_string()));
        state.value = value.to_string();
    }

    fn dispatch(&self, event: ControlEvent) {
        // Recorded only. Engine-dispatched events never loop back into
        // edit sinks; that is the host contract.
        self.state.lock().unwrap().events.push(event);
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.state.lock().unwrap().flags.contains(flag)
    }

    fn set_flag(&self, flag: &str) {
        self.state.lock().unwrap().flags.insert(flag.to_string());
    }

    fn add_class(&self, class: &str) {
        self.state.lock().unwrap().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state.lock().unwrap().classes.remove(class);
    }

    fn bind_edits(&self, sink: EditSink) {
        self.sinks.lock().unwrap().push(sink);
    }
}

fn tag_matches(tag: TagFilter, kind: ControlKind) -> bool {
    match tag {
        TagFilter::Any => true,
        TagFilter::Input => kind == ControlKind::Text,
        TagFilter::Select => kind == ControlKind::Select,
    }
}

fn matches(control: &FakeControl, selector: &Selector) -> bool {
    match selector {
        Selector::Id(id) => control.id == *id,
        Selector::Name(name) => control.name == *name,
        Selector::IdContainsAll(fragments) => {
            fragments.iter().all(|f| control.id.contains(f.as_str()))
        }
        Selector::AutocompleteWithin {
            id_fragment,
            autocomplete,
        } => {
            control.autocomplete.as_deref() == Some(autocomplete.as_str())
                && control
                    .ancestor_ids
                    .iter()
                    .any(|a| a.contains(id_fragment.as_str()))
        }
        Selector::ComponentForm { tag, id_fragment } => {
            control.in_component_form
                && tag_matches(*tag, control.kind)
                && control.id.contains(id_fragment.as_str())
        }
    }
}

/// A scripted form document.
pub struct FakeForm {
    controls: Mutex<Vec<Arc<FakeControl>>>,
    form_events: Mutex<Vec<FormEvent>>,
    mutation_sinks: Mutex<Vec<MutationSink>>,
    has_container: bool,
}

impl FakeForm {
    /// A form with an observable checkout container.
    pub fn new() -> Self {
        Self {
            controls: Mutex::new(Vec::new()),
            form_events: Mutex::new(Vec::new()),
            mutation_sinks: Mutex::new(Vec::new()),
            has_container: true,
        }
    }

    /// A document with no checkout container to observe.
    pub fn without_container() -> Self {
        Self {
            has_container: false,
            ..Self::new()
        }
    }

    /// Add a control; returns the shared handle for scripting.
    pub fn add(&self, control: FakeControl) -> Arc<FakeControl> {
        let control = Arc::new(control);
        self.controls.lock().unwrap().push(Arc::clone(&control));
        control
    }

    /// Remove a control by id, simulating the host tearing the form down.
    pub fn remove(&self, id: &str) {
        self.controls.lock().unwrap().retain(|c| c.id != id);
    }

    /// Fire the registered mutation sinks, simulating DOM churn.
    pub fn mutate(&self) {
        let sinks: Vec<MutationSink> = self.mutation_sinks.lock().unwrap().clone();
        for sink in sinks {
            sink();
        }
    }

    /// Form-level events dispatched so far, in order.
    pub fn form_events(&self) -> Vec<FormEvent> {
        self.form_events.lock().unwrap().clone()
    }

    /// Look up a control handle by id.
    pub fn control(&self, id: &str) -> Option<Arc<FakeControl>> {
        self.controls.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }
}

impl Default for FakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHost for FakeForm {
    fn find_controls(&self, selector: &Selector) -> Vec<Arc<dyn Control>> {
        self.controls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches(c, selector))
            .map(|c| Arc::clone(c) as Arc<dyn Control>)
            .collect()
    }

    fn dispatch_form_event(&self, event: FormEvent) {
        self.form_events.lock().unwrap().push(event);
    }

    fn observe_mutations(&self, sink: MutationSink) -> bool {
        if !self.has_container {
            return false;
        }
        self.mutation_sinks.lock().unwrap().push(sink);
        true
    }
}
