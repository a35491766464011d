//! # postfill-cli — Operator Command-Line Interface
//!
//! Admin/dev tooling around the autofill stack. The engine itself runs
//! embedded in a host form; this binary covers everything an operator does
//! around it: resolving postcodes against a deployment, validating dataset
//! files before shipping them, listing which countries a data directory can
//! serve, and previewing the address-field ordering.
//!
//! ## Subcommands
//!
//! - `lookup` — Resolve a postcode against an HTTP deployment or a local
//!   data directory
//! - `validate` — Parse and invariant-check dataset files
//! - `countries` — List servable datasets in a data directory
//! - `field-order` — Print the effective address-field priorities
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates — no lookup or
//!   validation logic lives here.

pub mod countries;
pub mod field_order;
pub mod lookup;
pub mod validate;
