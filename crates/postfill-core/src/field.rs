//! # Field Roles and Groups
//!
//! The logical coordinates of an address form control: which role it plays
//! (postcode, city, state, country) and which address group it belongs to
//! (billing or shipping). A role × group pair is what the field locator
//! resolves to a concrete control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical role of an address form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Postcode,
    City,
    State,
    Country,
}

impl FieldRole {
    /// The attribute-name form used in id/name conventions
    /// (`billing_postcode`, `shipping[city]`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postcode => "postcode",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address field group: which of the two address sets is being operated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Billing,
    Shipping,
}

impl FieldGroup {
    /// The id/name prefix this group uses in the host form.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::Shipping => "shipping",
        }
    }

    /// Infer the group from a control id, as component-based checkouts
    /// require (ids like `shipping-postcode` carry the group inline).
    /// Anything that does not mention shipping is billing.
    pub fn infer_from_id(id: &str) -> Self {
        if id.contains("shipping") {
            Self::Shipping
        } else {
            Self::Billing
        }
    }

    /// Both groups, in wiring order.
    pub const ALL: [Self; 2] = [Self::Billing, Self::Shipping];
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
