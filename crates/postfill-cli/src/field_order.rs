//! # Field-Order Subcommand
//!
//! Preview the address-field priorities the host platform applies: the
//! postcode-first ordering this stack exists for, or the platform default
//! for comparison.

use clap::Args;

use postfill_core::ordering::field_priorities;

/// Arguments for the `postfill field-order` subcommand.
#[derive(Args, Debug)]
pub struct FieldOrderArgs {
    /// Show the platform-default order instead of postcode-first.
    #[arg(long)]
    pub platform_default: bool,
}

pub fn run_field_order(args: &FieldOrderArgs) -> anyhow::Result<u8> {
    for (role, priority) in field_priorities(!args.platform_default) {
        println!("{priority:>3}  {role}");
    }
    Ok(0)
}
