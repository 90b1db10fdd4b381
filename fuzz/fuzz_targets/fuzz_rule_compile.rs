//! Fuzz target for access rule compilation and matching.
//!
//! Goal: Rule compilation should **never panic** on any input.
//! It may return errors for invalid lines, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_compile
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// A rule line paired with a candidate lookup key.
#[derive(Arbitrary, Debug)]
struct RuleInput {
    /// Raw rule line, possibly negated or full of metacharacters.
    line: String,
    /// Lookup key to match the compiled rule against.
    key: String,
}

fuzz_target!(|input: RuleInput| {
    if input.line.len() > 512 || input.key.len() > 512 {
        return;
    }

    // Compile errors are ordinary outcomes here.
    let _ = sandguard_domain::fuzz::compile_rule(&input.line);
    let _ = sandguard_domain::fuzz::compile_and_match(&input.line, &input.key);
});
