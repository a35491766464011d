//! # Autofill Orchestrator
//!
//! [`AutofillEngine`] owns the collaborators (host form, dataset cache,
//! settings, scheduler) and ties them together: wiring passes discover
//! postcode controls and bind their edits, and each debounced edit runs
//! the lookup-and-fill pipeline.
//!
//! Wiring is idempotent per control — a control that already carries the
//! initialization flag is skipped, so repeated passes (and the lifecycle
//! watcher runs them liberally) never stack duplicate bindings.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use postfill_core::{CountryCode, FieldGroup, FieldRole, Settings};
use postfill_dataset::DatasetCache;
use postfill_form::{
    Control, ControlKind, EditTrigger, FormEvent, FormHost, Selector, TagFilter,
};

use crate::inject::inject;
use crate::locate::{current_country, locate};
use crate::matcher::match_state;
use crate::schedule::{Debouncer, Scheduler, Task};

/// Marker flag a wired postcode control carries.
pub const INIT_FLAG: &str = "postfill-init";
/// Shortest postcode worth looking up. The shipped tables only carry keys
/// of five characters and up, so this is a cheap pre-filter, not a format
/// validator.
pub const MIN_POSTCODE_LEN: usize = 5;
/// Trailing-edge debounce applied to postcode keystrokes.
pub const EDIT_DEBOUNCE: Duration = Duration::from_millis(300);
/// Delay before reading a pasted value, which lands in the control
/// slightly after the paste event fires.
pub const PASTE_RECHECK: Duration = Duration::from_millis(100);

/// The autofill engine. Construct once per page/process; edit bindings
/// hold weak handles back to it, so dropping the last `Arc` tears all
/// wiring down with it.
pub struct AutofillEngine {
    host: Arc<dyn FormHost>,
    datasets: DatasetCache,
    settings: Settings,
    scheduler: Arc<dyn Scheduler>,
    debouncers: Mutex<HashMap<String, Arc<Debouncer>>>,
    injecting: AtomicBool,
    this: Weak<AutofillEngine>,
}

impl AutofillEngine {
    pub fn new(
        host: Arc<dyn FormHost>,
        datasets: DatasetCache,
        settings: Settings,
        scheduler: Arc<dyn Scheduler>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            host,
            datasets,
            settings,
            scheduler,
            debouncers: Mutex::new(HashMap::new()),
            injecting: AtomicBool::new(false),
            this: this.clone(),
        })
    }

    pub(crate) fn host(&self) -> &Arc<dyn FormHost> {
        &self.host
    }

    /// One wiring pass over the whole document: both classic field groups
    /// plus the component-form postcode scan. Safe to call repeatedly.
    pub fn wire_all(&self) {
        for group in FieldGroup::ALL {
            self.wire_group(group);
        }
        self.wire_component_form();
    }

    fn wire_group(&self, group: FieldGroup) {
        let Some(postcode) = locate(self.host.as_ref(), FieldRole::Postcode, group) else {
            tracing::trace!(%group, "no postcode control, group left unwired");
            return;
        };
        self.wire_postcode_control(postcode, group);
    }

    /// The component-based checkout renders postcode inputs with the group
    /// baked into the id, so the scan infers the group per control.
    fn wire_component_form(&self) {
        let scan = [
            Selector::ComponentForm {
                tag: TagFilter::Input,
                id_fragment: "postcode".to_string(),
            },
            Selector::id_contains_all(["billing-postcode"]),
            Selector::id_contains_all(["shipping-postcode"]),
        ];
        for selector in &scan {
            for control in self.host.find_controls(selector) {
                let group = FieldGroup::infer_from_id(&control.id());
                self.wire_postcode_control(control, group);
            }
        }
    }

    fn wire_postcode_control(&self, control: Arc<dyn Control>, group: FieldGroup) {
        if control.has_flag(INIT_FLAG) {
            return;
        }
        control.set_flag(INIT_FLAG);
        tracing::debug!(id = %control.id(), %group, "wiring postcode control");

        let Some(engine) = self.this.upgrade() else {
            return;
        };
        let bound = Arc::clone(&control);
        control.bind_edits(Arc::new(move |trigger| {
            engine.handle_edit(&bound, group, trigger);
        }));
    }

    fn handle_edit(&self, control: &Arc<dyn Control>, group: FieldGroup, trigger: EditTrigger) {
        // Injection output must never feed back into lookups. Hosts only
        // deliver genuine user edits here, but an edit signal arriving
        // while injection runs is dropped as a second line of defense.
        if self.injecting.load(Ordering::SeqCst) {
            tracing::trace!("edit signal during injection dropped");
            return;
        }

        let task = self.lookup_task(control, group);
        match trigger {
            EditTrigger::Edit => self.edit_debouncer(control, group).call(task),
            EditTrigger::Paste => {
                let _ = self.scheduler.once(PASTE_RECHECK, task);
            }
        }
    }

    /// A deferred lookup reading the control's value at fire time, not at
    /// keystroke time — the debounce window may have changed it.
    fn lookup_task(&self, control: &Arc<dyn Control>, group: FieldGroup) -> Task {
        let Some(engine) = self.this.upgrade() else {
            return Box::new(|| {});
        };
        let control = Arc::clone(control);
        Box::new(move || {
            let postcode = control.value().trim().to_string();
            tokio::spawn(async move {
                engine.lookup_and_fill(&postcode, group).await;
            });
        })
    }

    fn edit_debouncer(&self, control: &Arc<dyn Control>, group: FieldGroup) -> Arc<Debouncer> {
        let key = format!("{}:{}", group.prefix(), control.id());
        Arc::clone(
            self.debouncers
                .lock()
                .unwrap()
                .entry(key)
                .or_insert_with(|| {
                    Arc::new(Debouncer::new(Arc::clone(&self.scheduler), EDIT_DEBOUNCE))
                }),
        )
    }

    /// Look the postcode up and fill city/state.
    ///
    /// Every abort is a silent no-op at debug level: a postcode that is
    /// not in the dataset is an expected outcome, and the shopper just
    /// keeps typing. Within one invocation, city is written before state,
    /// and the recalculation event follows both.
    ///
    /// Overlapping invocations are not ordered: a slow uncached lookup
    /// that finishes after a later cached one still applies its result.
    /// The debounce keeps the window small; the race is a known, accepted
    /// limitation.
    pub async fn lookup_and_fill(&self, postcode: &str, group: FieldGroup) {
        let raw_country = current_country(self.host.as_ref(), group);
        let Some(country) = CountryCode::normalize(&raw_country) else {
            tracing::debug!(%raw_country, "country value not normalizable, skipping");
            return;
        };
        if !self.settings.is_enabled(&country) {
            tracing::debug!(%country, "country not enabled, skipping");
            return;
        }

        let postcode = postcode.trim();
        if postcode.len() < MIN_POSTCODE_LEN {
            tracing::trace!(%postcode, "postcode below minimum length, skipping");
            return;
        }

        let Some(table) = self.datasets.table(&country).await else {
            tracing::debug!(%country, "no dataset, skipping");
            return;
        };
        let Some(hit) = table.resolve(postcode) else {
            tracing::debug!(%postcode, %country, "postcode not in dataset, skipping");
            return;
        };

        self.injecting.store(true, Ordering::SeqCst);

        if let Some(city) = locate(self.host.as_ref(), FieldRole::City, group) {
            inject(&self.scheduler, &city, hit.locality);
        }

        if let Some(state) = locate(self.host.as_ref(), FieldRole::State, group) {
            match state.kind() {
                ControlKind::Select => {
                    let options = state.options();
                    if let Some(option) = match_state(&options, hit.state) {
                        let value = option.value.clone();
                        inject(&self.scheduler, &state, &value);
                    } else {
                        tracing::debug!(
                            state = hit.state,
                            "no matching state option, select left untouched"
                        );
                    }
                }
                ControlKind::Text => inject(&self.scheduler, &state, hit.state),
            }
        }

        self.injecting.store(false, Ordering::SeqCst);

        self.host.dispatch_form_event(FormEvent::UpdateCheckout);
    }
}

impl std::fmt::Debug for AutofillEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutofillEngine")
            .field("settings", &self.settings)
            .field("datasets", &self.datasets)
            .finish_non_exhaustive()
    }
}
