//! Compiled-in access list configuration and profile resolution.
//!
//! This crate is intentionally IO-free: the rule tables ship inside the
//! binary, and profile selection works on plain strings provided by the host.

#![forbid(unsafe_code)]

mod line;
mod presets;
mod profile;
pub mod tables;

pub use line::RuleLine;
pub use presets::{RuleTables, rule_tables};
pub use profile::Profile;
