//! Symbol canonicalization.
//!
//! Renders a symbol descriptor into the dotted string form the rule tables
//! are written against. The rendering is deliberately byte-exact with the
//! historical rule dialect: the namespace part and the member part are joined
//! with an unconditional `.`, so a type in the global namespace renders with
//! a leading dot, and constructors (metadata name `.ctor`) render with a
//! doubled dot. Existing rule lines depend on both.

use crate::error::{AccessError, Result};
use sandguard_types::{PropertyAccess, SymbolKind, SymbolRef, TypePath};

/// Canonical policy-matching form of a symbol reference.
///
/// Fails on symbol kinds with no rule form (events, and any kind added to the
/// host model later); a verdict must never be invented for those.
pub fn canonical_name(symbol: &SymbolRef) -> Result<String> {
    let namespace = symbol.namespace.join(".");
    let types = symbol.types.join(".");

    match &symbol.kind {
        SymbolKind::Namespace => {
            if namespace.is_empty() {
                Ok(symbol.name.clone())
            } else {
                Ok(format!("{namespace}.{}", symbol.name))
            }
        }
        SymbolKind::Type => {
            if types.is_empty() {
                Ok(format!("{namespace}.{}", symbol.name))
            } else {
                Ok(format!("{namespace}.{types}.{}", symbol.name))
            }
        }
        SymbolKind::Method { parameters } => Ok(format!(
            "{namespace}.{types}.{}",
            method_string(&symbol.name, parameters)
        )),
        SymbolKind::Property { access } => {
            let member = match access {
                PropertyAccess::Getter => format!("get_{}()", symbol.name),
                PropertyAccess::Setter => format!("set_{}()", symbol.name),
                PropertyAccess::Plain => symbol.name.clone(),
            };
            Ok(format!("{namespace}.{types}.{member}"))
        }
        SymbolKind::Field => Ok(format!("{namespace}.{types}.{}", symbol.name)),
        _ => Err(AccessError::unsupported_symbol(symbol.kind.name())),
    }
}

fn method_string(name: &str, parameters: &[TypePath]) -> String {
    if parameters.is_empty() {
        return format!("{name}()");
    }

    let rendered: Vec<String> = parameters.iter().map(parameter_string).collect();
    format!("{name}( {} )", rendered.join(", "))
}

/// A parameter renders at its type's namespace + type-chain level, with the
/// same unconditional dot join. Generic arguments never appear here.
fn parameter_string(path: &TypePath) -> String {
    format!("{}.{}", path.namespace_string(), path.type_string())
}
