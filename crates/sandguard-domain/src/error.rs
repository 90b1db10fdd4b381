//! Error types for access list evaluation.

use thiserror::Error;

/// Result type for access list operations.
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors from policy construction and symbol canonicalization.
///
/// There is deliberately no "unknown verdict" variant: every evaluation either
/// answers with a boolean or fails loudly here.
#[derive(Error, Debug)]
pub enum AccessError {
    /// A rule line did not compile into a matcher. Raised at policy build
    /// time; a bad rule aborts the build rather than being dropped.
    #[error("invalid access rule {rule:?}: {source}")]
    InvalidRule {
        rule: String,
        #[source]
        source: globset::Error,
    },

    /// Assembling the compiled rules into a match set failed.
    #[error("failed to assemble rule set: {0}")]
    RuleSet(#[from] globset::Error),

    /// The canonicalizer was handed a symbol kind it has no rule form for.
    #[error("cannot canonicalize a {kind} symbol")]
    UnsupportedSymbol { kind: &'static str },
}

impl AccessError {
    /// Create an invalid rule error.
    pub fn invalid_rule(rule: impl Into<String>, source: globset::Error) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            source,
        }
    }

    /// Create an unsupported symbol error.
    pub fn unsupported_symbol(kind: &'static str) -> Self {
        Self::UnsupportedSymbol { kind }
    }
}
