//! # Address Field Ordering
//!
//! Priority tables for the address fields the autofill touches. Host
//! platforms order form fields by ascending numeric priority; these tables
//! are the values the host applies when rendering.
//!
//! The whole point of the feature: with reordering on, postcode comes
//! before city and state, so typing the postcode first lets autofill
//! populate the rest. The platform-default table keeps postcode last.

use crate::field::FieldRole;

/// Priorities presenting postcode before city/state.
const POSTCODE_FIRST: [(FieldRole, u8); 4] = [
    (FieldRole::Country, 40),
    (FieldRole::Postcode, 65),
    (FieldRole::City, 70),
    (FieldRole::State, 80),
];

/// Platform-default priorities (postcode last).
const PLATFORM_DEFAULT: [(FieldRole, u8); 4] = [
    (FieldRole::Country, 40),
    (FieldRole::City, 70),
    (FieldRole::State, 80),
    (FieldRole::Postcode, 90),
];

/// The priority table for the given toggle, in ascending priority order.
pub fn field_priorities(postcode_first: bool) -> [(FieldRole, u8); 4] {
    if postcode_first {
        POSTCODE_FIRST
    } else {
        PLATFORM_DEFAULT
    }
}

/// Priority of a single role under the given toggle.
pub fn priority_of(role: FieldRole, postcode_first: bool) -> u8 {
    field_priorities(postcode_first)
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, p)| *p)
        .unwrap_or(u8::MAX)
}
