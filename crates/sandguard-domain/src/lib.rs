//! Pure access list evaluation (no IO).
//!
//! Input: symbol descriptors as the analysis host resolved them.
//! Output: allow/deny verdicts, computed against the active profile's
//! compiled rule tables and cached per distinct symbol.

#![forbid(unsafe_code)]

pub mod cache;
pub mod canonical;
pub mod compile;
pub mod policy;

mod engine;
mod error;
#[cfg(test)]
mod proptests;

pub use canonical::canonical_name;
pub use engine::AccessEngine;
pub use error::{AccessError, Result};
pub use policy::PolicySet;

/// Fuzz-friendly API for exercising rule compilation and canonicalization
/// without a host compiler attached.
/// Every function here tolerates arbitrary input without panicking.
pub mod fuzz {
    use super::*;
    use sandguard_types::SymbolRef;

    /// Compile arbitrary text as a single access rule line.
    ///
    /// Returns `Ok(...)` when the line compiles to a matcher, `Err(...)`
    /// otherwise. **Never panics** on any input.
    pub fn compile_rule(line: &str) -> Result<()> {
        let _ = compile::compile(line)?;
        Ok(())
    }

    /// Compile a rule line and match it against a candidate lookup key.
    ///
    /// **Never panics** on any input.
    pub fn compile_and_match(line: &str, key: &str) -> Result<bool> {
        let rule = compile::compile(line)?;
        let matcher = rule.glob.compile_matcher();
        Ok(matcher.is_match(key))
    }

    /// Canonicalize an arbitrary symbol descriptor.
    ///
    /// Returns `Err(...)` only for descriptor kinds the canonicalizer does
    /// not cover. **Never panics** on any input.
    pub fn canonicalize(symbol: &SymbolRef) -> Result<String> {
        canonical::canonical_name(symbol)
    }
}
