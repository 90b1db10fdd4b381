//! Rule line compilation.
//!
//! A rule line is a flat string pattern in which `*` is the only
//! metacharacter, matching any run of characters including `.` and `/`.
//! Everything else matches itself. Compiled matchers are anchored at both
//! ends; substring matches are never rule matches.

use crate::error::{AccessError, Result};
use globset::{Glob, GlobBuilder};
use sandguard_settings::RuleLine;

/// One rule line compiled into its polarity and matcher.
#[derive(Clone, Debug)]
pub struct CompiledRule {
    /// True for blacklist entries (`!`-prefixed lines).
    pub negated: bool,
    /// The compiled pattern, built from the line body.
    pub glob: Glob,
    /// The line as written, negation marker included. Kept for rule tracing.
    pub line: String,
}

/// Compile a single rule line.
///
/// The line is trimmed and a single leading `!` marks the rule as a blacklist
/// entry. A line that fails to compile is a configuration error; callers
/// abort the containing policy build rather than dropping the rule.
pub fn compile(line: &str) -> Result<CompiledRule> {
    let parsed = RuleLine::parse(line);
    let glob = build_glob(parsed.body).map_err(|e| AccessError::invalid_rule(line.trim(), e))?;

    Ok(CompiledRule {
        negated: parsed.negated,
        glob,
        line: line.trim().to_string(),
    })
}

fn build_glob(body: &str) -> std::result::Result<Glob, globset::Error> {
    // The lookup key is one flat string: `*` must cross `.` and `/` freely,
    // so path-component semantics are disabled.
    GlobBuilder::new(&escape_body(body))
        .literal_separator(false)
        .backslash_escape(true)
        .build()
}

/// Escape every glob metacharacter except `*`, which stays the wildcard.
fn escape_body(body: &str) -> String {
    let mut escaped = String::with_capacity(body.len());
    for c in body.chars() {
        if matches!(c, '?' | '[' | ']' | '{' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
