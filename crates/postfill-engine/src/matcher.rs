//! # State Matcher
//!
//! Map a canonical state name from a lookup table to the best option of a
//! select control. Option lists vary between checkouts — some carry the
//! official name, some a longer regional variant, some an abbreviation the
//! canonical name embeds — so matching tolerates containment in both
//! directions.

use postfill_form::SelectOption;

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// First option matching the canonical state name, scanning options in
/// their declared order. Per option, in order: exact equality, option
/// label contains the target, target contains the option label — all on
/// lowercased, trimmed text.
///
/// Returns `None` when nothing matches (the select is then left untouched)
/// and when the target normalizes to empty, which must not match a
/// placeholder option by vacuous containment.
pub fn match_state<'a>(options: &'a [SelectOption], target: &str) -> Option<&'a SelectOption> {
    let target = normalize(target);
    if target.is_empty() {
        return None;
    }

    options.iter().find(|option| {
        let label = normalize(&option.label);
        label == target || label.contains(&target) || target.contains(&label)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Selangor", "SGR"),
            SelectOption::new("Johor", "JHR"),
            SelectOption::new("Wilayah Persekutuan Kuala Lumpur", "KUL"),
        ]
    }

    #[test]
    fn exact_match_wins() {
        let opts = options();
        let hit = match_state(&opts, "Johor").unwrap();
        assert_eq!(hit.value, "JHR");
    }

    #[test]
    fn matching_ignores_case_and_surrounding_whitespace() {
        let opts = options();
        let hit = match_state(&opts, "  SELANGOR ").unwrap();
        assert_eq!(hit.value, "SGR");
    }

    #[test]
    fn option_label_may_contain_the_target() {
        // Canonical "Kuala Lumpur" vs the longer official option label.
        let opts = options();
        let hit = match_state(&opts, "Kuala Lumpur").unwrap();
        assert_eq!(hit.value, "KUL");
    }

    #[test]
    fn target_may_contain_the_option_label() {
        let opts = vec![SelectOption::new("Penang", "PNG")];
        let hit = match_state(&opts, "Pulau Pinang (Penang)").unwrap();
        assert_eq!(hit.value, "PNG");
    }

    #[test]
    fn first_declared_option_wins_on_ties() {
        let opts = vec![
            SelectOption::new("Johor", "first"),
            SelectOption::new("Johor", "second"),
        ];
        assert_eq!(match_state(&opts, "Johor").unwrap().value, "first");
    }

    #[test]
    fn no_match_returns_none() {
        assert!(match_state(&options(), "Sarawak").is_none());
    }

    #[test]
    fn empty_target_matches_nothing() {
        assert!(match_state(&options(), "   ").is_none());
    }
}
