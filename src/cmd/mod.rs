//! Command module structure for the fieldbook CLI

use anyhow::Result;
use serde::Serialize;

pub mod new_entry;
pub mod reference;
pub mod validate;

/// Print a value as pretty JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
