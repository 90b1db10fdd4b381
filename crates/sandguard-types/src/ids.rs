//! Stable identifiers and message templates for access list diagnostics.
//!
//! Hosts report denials under one diagnostic id; the engine only supplies the
//! canonical name that gets formatted into the message.

/// Diagnostic id reported for a symbol denied by the access list.
pub const DIAG_ACCESS_LIST: &str = "SB9001";

/// Category grouping for the access list diagnostic.
pub const DIAG_ACCESS_LIST_CATEGORY: &str = "Code Access";

/// The one-argument denial message, formatted with the canonical name.
pub fn denial_message(canonical_name: &str) -> String {
    format!("'{canonical_name}' is not permitted by the code access list")
}
