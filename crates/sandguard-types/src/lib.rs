//! Stable symbol descriptor types and IDs used across the sandguard workspace.
//!
//! This crate is intentionally boring:
//! - the structured symbol descriptor a host hands to the policy engine
//! - diagnostic display rendering for generic types
//! - stable diagnostic IDs and message templates

#![forbid(unsafe_code)]

pub mod display;
pub mod ids;
pub mod symbol;

pub use display::TypeRef;
pub use symbol::{PropertyAccess, SymbolKind, SymbolRef, TypePath};
