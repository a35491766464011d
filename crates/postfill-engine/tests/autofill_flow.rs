//! End-to-end autofill scenarios over the in-memory fake host.
//!
//! All timer-driven paths (debounce, paste re-check, highlight) run under
//! paused virtual time, so the tests advance the clock instead of waiting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use postfill_core::{CountryCode, FieldGroup, LookupTable, Settings, TableEntry};
use postfill_dataset::{DatasetCache, DatasetError, DatasetFetcher};
use postfill_engine::inject::HIGHLIGHT_CLASS;
use postfill_engine::{AutofillEngine, TokioScheduler};
use postfill_form::fake::{FakeControl, FakeForm};
use postfill_form::{Control, FormEvent, FormHost, SelectOption, SetterProbe, WriteRoute};

fn my_table() -> LookupTable {
    LookupTable {
        country: CountryCode::normalize("MY").unwrap(),
        states: vec!["Selangor".into(), "Johor".into()],
        entries: HashMap::from([
            ("43000".to_string(), TableEntry("Kajang".into(), 0)),
            ("79100".to_string(), TableEntry("Iskandar Puteri".into(), 1)),
        ]),
    }
}

/// Serves the Malaysian table, 404s everything else, counts fetches.
#[derive(Default)]
struct StubFetcher {
    calls: AtomicUsize,
}

impl StubFetcher {
    fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetFetcher for StubFetcher {
    async fn fetch(&self, country: &CountryCode) -> Result<LookupTable, DatasetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if country.as_str() == "my" {
            Ok(my_table())
        } else {
            Err(DatasetError::Status {
                country: country.clone(),
                status: 404,
            })
        }
    }
}

fn engine_for(form: &Arc<FakeForm>, enabled: &str) -> (Arc<AutofillEngine>, Arc<StubFetcher>) {
    let fetcher = Arc::new(StubFetcher::default());
    let cache = DatasetCache::new(Arc::clone(&fetcher) as Arc<dyn DatasetFetcher>);
    let settings = Settings::new(Settings::parse_countries(enabled), true);
    let engine = AutofillEngine::new(
        Arc::clone(form) as Arc<dyn FormHost>,
        cache,
        settings,
        Arc::new(TokioScheduler),
    );
    (engine, fetcher)
}

/// Classic billing form: postcode, city, state select, country.
fn classic_billing(form: &FakeForm) -> ClassicBilling {
    ClassicBilling {
        postcode: form.add(FakeControl::text("billing_postcode")),
        city: form.add(FakeControl::text("billing_city")),
        state: form.add(FakeControl::select(
            "billing_state",
            vec![
                SelectOption::new("Selangor", "Selangor"),
                SelectOption::new("Johor", "Johor"),
            ],
        )),
        country: form.add(FakeControl::text("billing_country").with_value("MY")),
    }
}

struct ClassicBilling {
    postcode: Arc<FakeControl>,
    city: Arc<FakeControl>,
    state: Arc<FakeControl>,
    country: Arc<FakeControl>,
}

/// Let timers fire and spawned lookups settle.
async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn debounced_edit_fills_city_and_state_and_signals_recalculation() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    fields.postcode.user_edit("43000");
    settle(350).await;

    assert_eq!(fields.city.value(), "Kajang");
    assert_eq!(fields.state.value(), "Selangor");
    assert_eq!(form.form_events(), vec![FormEvent::UpdateCheckout]);
    assert_eq!(fetcher.count(), 1);

    // Both fields flash the highlight, which clears on its own.
    assert!(fields.city.has_class(HIGHLIGHT_CLASS));
    assert!(fields.state.has_class(HIGHLIGHT_CLASS));
    settle(2000).await;
    assert!(!fields.city.has_class(HIGHLIGHT_CLASS));
    assert!(!fields.state.has_class(HIGHLIGHT_CLASS));
}

#[tokio::test(start_paused = true)]
async fn keystroke_burst_runs_a_single_lookup() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    for partial in ["4", "43", "430", "4300", "43000"] {
        fields.postcode.user_edit(partial);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    settle(400).await;

    assert_eq!(fetcher.count(), 1);
    assert_eq!(fields.city.writes().len(), 1);
    assert_eq!(fields.city.value(), "Kajang");
}

#[tokio::test(start_paused = true)]
async fn short_postcode_causes_no_fetch_and_no_mutation() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    fields.postcode.user_edit("4300");
    settle(400).await;

    assert_eq!(fetcher.count(), 0);
    assert!(fields.city.writes().is_empty());
    assert!(fields.state.writes().is_empty());
    assert!(form.form_events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unknown_postcode_touches_nothing() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    fields.postcode.user_edit("99999");
    settle(400).await;

    assert_eq!(fetcher.count(), 1);
    assert!(fields.city.writes().is_empty());
    assert!(fields.state.writes().is_empty());
    assert!(form.form_events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn disabled_country_aborts_before_any_fetch() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    fields.country.user_edit("SG");
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    fields.postcode.user_edit("43000");
    settle(400).await;

    assert_eq!(fetcher.count(), 0);
    assert!(fields.city.writes().is_empty());
    assert!(form.form_events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn missing_country_control_defaults_to_malaysia() {
    let form = Arc::new(FakeForm::new());
    let postcode = form.add(FakeControl::text("billing_postcode"));
    let city = form.add(FakeControl::text("billing_city"));
    let (engine, _fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    postcode.user_edit("43000");
    settle(400).await;

    assert_eq!(city.value(), "Kajang");
}

#[tokio::test(start_paused = true)]
async fn repeating_a_lookup_yields_the_same_final_values() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.lookup_and_fill("43000", FieldGroup::Billing).await;
    engine.lookup_and_fill("43000", FieldGroup::Billing).await;

    assert_eq!(fields.city.value(), "Kajang");
    assert_eq!(fields.state.value(), "Selangor");
    // Overwrite, not merge: two writes, one table fetch.
    assert_eq!(fields.city.writes().len(), 2);
    assert_eq!(fetcher.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn second_wiring_pass_never_double_binds() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    engine.wire_all();
    assert_eq!(fields.postcode.edit_sink_count(), 1);

    fields.postcode.user_edit("43000");
    settle(400).await;
    assert_eq!(fetcher.count(), 1);
    assert_eq!(fields.city.writes().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn framework_managed_control_is_written_through_the_prototype_setter() {
    let form = Arc::new(FakeForm::new());
    form.add(FakeControl::text("billing_postcode"));
    let city = form.add(
        FakeControl::text("billing_city").with_probe(SetterProbe::framework_managed()),
    );
    form.add(FakeControl::text("billing_country").with_value("MY"));
    let (engine, _fetcher) = engine_for(&form, "MY");

    engine.lookup_and_fill("43000", FieldGroup::Billing).await;

    assert_eq!(
        city.writes(),
        vec![(WriteRoute::Prototype, "Kajang".to_string())]
    );
    use postfill_form::ControlEvent;
    assert_eq!(
        city.dispatched(),
        vec![
            ControlEvent::Input,
            ControlEvent::Change,
            ControlEvent::LegacyChange,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn id_fragment_conventions_fill_the_shipping_group() {
    let form = Arc::new(FakeForm::new());
    let postcode = form.add(FakeControl::text("contact-shipping-postcode"));
    let city = form.add(FakeControl::text("shipping-city"));
    // Free-text state field: gets the canonical name directly.
    let state = form.add(FakeControl::text("shipping-state"));
    let (engine, _fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    postcode.user_edit("79100");
    settle(400).await;

    assert_eq!(city.value(), "Iskandar Puteri");
    assert_eq!(state.value(), "Johor");
}

#[tokio::test(start_paused = true)]
async fn component_form_checkout_fills_through_its_own_conventions() {
    // A component-based checkout renders one address form; its selectors
    // carry no group prefix, so whichever wiring pass claims the postcode
    // first still resolves city and state within the same form.
    let form = Arc::new(FakeForm::new());
    let postcode = form.add(FakeControl::text("shipping-postcode").in_component_form());
    let city = form.add(FakeControl::text("shipping-city").in_component_form());
    let state = form.add(
        FakeControl::select(
            "shipping-state",
            vec![
                SelectOption::new("Selangor", "SGR"),
                SelectOption::new("Johor", "JHR"),
            ],
        )
        .in_component_form(),
    );
    let (engine, _fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    postcode.user_edit("79100");
    settle(400).await;

    assert_eq!(city.value(), "Iskandar Puteri");
    assert_eq!(state.value(), "JHR");
}

#[tokio::test(start_paused = true)]
async fn unmatched_state_option_leaves_the_select_untouched() {
    let form = Arc::new(FakeForm::new());
    form.add(FakeControl::text("billing_postcode"));
    let city = form.add(FakeControl::text("billing_city"));
    let state = form.add(FakeControl::select(
        "billing_state",
        vec![SelectOption::new("Perak", "PRK")],
    ));
    form.add(FakeControl::text("billing_country").with_value("MY"));
    let (engine, _fetcher) = engine_for(&form, "MY");

    engine.lookup_and_fill("43000", FieldGroup::Billing).await;

    assert_eq!(city.value(), "Kajang");
    assert!(state.writes().is_empty());
    assert!(!state.has_class(HIGHLIGHT_CLASS));
    // The recalculation signal still fires for the city write.
    assert_eq!(form.form_events(), vec![FormEvent::UpdateCheckout]);
}

#[tokio::test(start_paused = true)]
async fn pasted_postcode_is_picked_up_after_the_recheck_delay() {
    let form = Arc::new(FakeForm::new());
    let fields = classic_billing(&form);
    let (engine, fetcher) = engine_for(&form, "MY");

    engine.wire_all();
    fields.postcode.user_paste("43000");
    settle(150).await;

    assert_eq!(fetcher.count(), 1);
    assert_eq!(fields.city.value(), "Kajang");
}
