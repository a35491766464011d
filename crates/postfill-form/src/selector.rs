//! # Typed Selectors
//!
//! The selector strategies the field locator works through, as a typed enum.
//! Each variant corresponds to one of the id/name conventions observed
//! across checkout implementations; [`Selector::to_css`] renders the exact
//! conventional CSS string for DOM-backed hosts, while structural hosts can
//! match on the variants directly.

use std::fmt;

/// Container class of the component-based checkout's address form.
pub const COMPONENT_FORM_CLASS: &str = "wc-block-components-address-form";

/// Element-tag restriction for selectors that carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter {
    /// Any element.
    Any,
    /// Text-entry controls (`input`).
    Input,
    /// Selectable lists (`select`).
    Select,
}

impl TagFilter {
    fn as_css(&self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Input => "input",
            Self::Select => "select",
        }
    }
}

/// One field-resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Exact element id: `#billing_postcode`.
    Id(String),
    /// Exact name attribute: `[name="billing_postcode"]` or
    /// `[name="billing[postcode]"]`.
    Name(String),
    /// All fragments must appear in the element id:
    /// `[id*="billing"][id*="postcode"]`.
    IdContainsAll(Vec<String>),
    /// An autocomplete-annotated control inside a container whose id
    /// contains the fragment: `[id*="billing"] [autocomplete="country"]`.
    AutocompleteWithin {
        /// Fragment the container id must contain.
        id_fragment: String,
        /// Required `autocomplete` attribute value.
        autocomplete: String,
    },
    /// A control inside the component-based address form whose id contains
    /// the fragment: `.wc-block-components-address-form input[id*="city"]`.
    ComponentForm {
        /// Tag restriction, if the convention names one.
        tag: TagFilter,
        /// Fragment the control id must contain.
        id_fragment: String,
    },
}

impl Selector {
    /// Convenience constructors keep the locator's strategy tables terse.
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    pub fn id_contains_all<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::IdContainsAll(fragments.into_iter().map(Into::into).collect())
    }

    /// Render the conventional CSS form of this selector.
    pub fn to_css(&self) -> String {
        match self {
            Self::Id(id) => format!("#{id}"),
            Self::Name(name) => format!("[name=\"{name}\"]"),
            Self::IdContainsAll(fragments) => fragments
                .iter()
                .map(|f| format!("[id*=\"{f}\"]"))
                .collect::<String>(),
            Self::AutocompleteWithin {
                id_fragment,
                autocomplete,
            } => format!("[id*=\"{id_fragment}\"] [autocomplete=\"{autocomplete}\"]"),
            Self::ComponentForm { tag, id_fragment } => format!(
                ".{COMPONENT_FORM_CLASS} {}[id*=\"{id_fragment}\"]",
                tag.as_css()
            ),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_conventional_css_strings() {
        assert_eq!(Selector::id("billing_postcode").to_css(), "#billing_postcode");
        assert_eq!(
            Selector::name("billing[postcode]").to_css(),
            "[name=\"billing[postcode]\"]"
        );
        assert_eq!(
            Selector::id_contains_all(["billing", "city"]).to_css(),
            "[id*=\"billing\"][id*=\"city\"]"
        );
        assert_eq!(
            Selector::AutocompleteWithin {
                id_fragment: "billing".into(),
                autocomplete: "country".into(),
            }
            .to_css(),
            "[id*=\"billing\"] [autocomplete=\"country\"]"
        );
        assert_eq!(
            Selector::ComponentForm {
                tag: TagFilter::Input,
                id_fragment: "postcode".into(),
            }
            .to_css(),
            ".wc-block-components-address-form input[id*=\"postcode\"]"
        );
        assert_eq!(
            Selector::ComponentForm {
                tag: TagFilter::Any,
                id_fragment: "country".into(),
            }
            .to_css(),
            ".wc-block-components-address-form [id*=\"country\"]"
        );
    }
}
