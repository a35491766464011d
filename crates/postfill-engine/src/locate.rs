//! # Field Locator
//!
//! Resolve a logical field (role × group) to a concrete control. Checkout
//! implementations disagree about how address fields are addressed — id
//! with underscore, id with dash, name attribute, nested-array name,
//! sub-field id, and the component-based form's own fragment conventions —
//! so each role gets an ordered list of strategies and the first one that
//! resolves wins.
//!
//! Resolution is never cached: the host can tear the form down and rebuild
//! it at any time, so every lookup re-resolves from scratch.

use std::sync::Arc;

use postfill_core::{CountryCode, FieldGroup, FieldRole};
use postfill_form::{Control, FormHost, Selector, TagFilter};

/// The shared id/name conventions of the classic checkout form.
fn classic_plan(prefix: &str, role: &str) -> Vec<Selector> {
    vec![
        Selector::id(format!("{prefix}_{role}")),
        Selector::id(format!("{prefix}-{role}")),
        Selector::name(format!("{prefix}_{role}")),
        Selector::name(format!("{prefix}[{role}]")),
        Selector::id(format!("{prefix}-address_{role}")),
        Selector::id_contains_all([prefix, role]),
    ]
}

/// Ordered selector strategies for a role within a group.
pub fn selector_plan(role: FieldRole, group: FieldGroup) -> Vec<Selector> {
    let prefix = group.prefix();
    let name = role.as_str();

    match role {
        FieldRole::Country => vec![
            Selector::id(format!("{prefix}_{name}")),
            Selector::id(format!("{prefix}-{name}")),
            Selector::name(format!("{prefix}_{name}")),
            Selector::name(format!("{prefix}[{name}]")),
            Selector::AutocompleteWithin {
                id_fragment: prefix.to_string(),
                autocomplete: "country".to_string(),
            },
            Selector::ComponentForm {
                tag: TagFilter::Any,
                id_fragment: name.to_string(),
            },
        ],
        FieldRole::State => {
            let mut plan = classic_plan(prefix, name);
            // The component form renders state as a select in most
            // countries and as a plain input in the rest.
            plan.push(Selector::ComponentForm {
                tag: TagFilter::Select,
                id_fragment: name.to_string(),
            });
            plan.push(Selector::ComponentForm {
                tag: TagFilter::Input,
                id_fragment: name.to_string(),
            });
            plan
        }
        FieldRole::Postcode | FieldRole::City => {
            let mut plan = classic_plan(prefix, name);
            plan.push(Selector::ComponentForm {
                tag: TagFilter::Input,
                id_fragment: name.to_string(),
            });
            plan
        }
    }
}

/// Resolve a role within a group to the first matching control.
pub fn locate(
    host: &dyn FormHost,
    role: FieldRole,
    group: FieldGroup,
) -> Option<Arc<dyn Control>> {
    selector_plan(role, group)
        .iter()
        .find_map(|selector| host.find_control(selector))
}

/// The current country value for a group.
///
/// Country is the one role with a fallback: when no control resolves, the
/// default country is assumed rather than skipping the lookup. A resolved
/// control's value is returned verbatim, even when empty — normalization
/// and enablement checks are the caller's concern.
pub fn current_country(host: &dyn FormHost, group: FieldGroup) -> String {
    match locate(host, FieldRole::Country, group) {
        Some(control) => control.value(),
        None => CountryCode::default().to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_render_the_conventional_selector_strings() {
        let css: Vec<String> = selector_plan(FieldRole::City, FieldGroup::Billing)
            .iter()
            .map(Selector::to_css)
            .collect();
        assert_eq!(
            css,
            vec![
                "#billing_city",
                "#billing-city",
                "[name=\"billing_city\"]",
                "[name=\"billing[city]\"]",
                "#billing-address_city",
                "[id*=\"billing\"][id*=\"city\"]",
                ".wc-block-components-address-form input[id*=\"city\"]",
            ]
        );
    }

    #[test]
    fn country_plan_includes_the_autocomplete_fallback() {
        let plan = selector_plan(FieldRole::Country, FieldGroup::Shipping);
        assert!(plan.contains(&Selector::AutocompleteWithin {
            id_fragment: "shipping".into(),
            autocomplete: "country".into(),
        }));
    }

    #[test]
    fn state_plan_prefers_selects_in_the_component_form() {
        let plan = selector_plan(FieldRole::State, FieldGroup::Billing);
        let select_pos = plan
            .iter()
            .position(|s| {
                matches!(
                    s,
                    Selector::ComponentForm {
                        tag: TagFilter::Select,
                        ..
                    }
                )
            })
            .unwrap();
        let input_pos = plan
            .iter()
            .position(|s| {
                matches!(
                    s,
                    Selector::ComponentForm {
                        tag: TagFilter::Input,
                        ..
                    }
                )
            })
            .unwrap();
        assert!(select_pos < input_pos);
    }
}
