//! # postfill-core — Foundational Types for the Postcode Autofill Engine
//!
//! This crate is the bedrock of the postfill workspace. It defines the
//! domain primitives every other crate builds on; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`CountryCode`] is a
//!    validated newtype — no bare strings for country identifiers. Anything
//!    that survived `CountryCode::normalize` is a well-formed two-letter
//!    code, lowercase, ASCII.
//!
//! 2. **Validated wire models.** [`LookupTable`] mirrors the dataset wire
//!    format exactly and carries a `validate()` pass that enforces the one
//!    structural invariant (every state index points into the state list).
//!    A table that fails validation is treated as absent, never partially
//!    used.
//!
//! 3. **Absence is not an error.** Lookup misses, missing fields and missing
//!    datasets are expected outcomes in this domain. The fallible paths here
//!    return `Option`/`Result` and leave policy to the callers.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `postfill-*` crates (this is the leaf of the
//!   DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and the wire-facing ones
//!   implement `Serialize`/`Deserialize`.

pub mod country;
pub mod error;
pub mod field;
pub mod ordering;
pub mod settings;
pub mod table;

// Re-export primary types for ergonomic imports.
pub use country::CountryCode;
pub use error::{InvalidCountryCode, TableError};
pub use field::{FieldGroup, FieldRole};
pub use settings::Settings;
pub use table::{LookupTable, ResolvedEntry, TableEntry};
