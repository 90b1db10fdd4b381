//! Fuzz target for symbol canonicalization.
//!
//! Goal: Canonicalization should **never panic** on any descriptor.
//! Unsupported kinds may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_canonicalize
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sandguard_types::{PropertyAccess, SymbolRef, TypePath};

/// Structured symbol descriptor input.
#[derive(Arbitrary, Debug)]
struct SymbolInput {
    assembly: Option<String>,
    namespace: Vec<String>,
    types: Vec<String>,
    name: String,
    kind: KindInput,
}

#[derive(Arbitrary, Debug)]
enum KindInput {
    Namespace,
    Type,
    Method { parameters: Vec<ParameterInput> },
    Getter,
    Setter,
    PlainProperty,
    Field,
    Event,
}

#[derive(Arbitrary, Debug)]
struct ParameterInput {
    namespace: Vec<String>,
    types: Vec<String>,
}

fn refs(parts: &[String]) -> Vec<&str> {
    parts.iter().map(String::as_str).collect()
}

fn build_symbol(input: SymbolInput) -> SymbolRef {
    let ns = refs(&input.namespace);
    let tys = refs(&input.types);

    let symbol = match input.kind {
        KindInput::Namespace => SymbolRef::namespace(&ns, &input.name),
        KindInput::Type => SymbolRef::named_type(&ns, &tys, &input.name),
        KindInput::Method { parameters } => {
            let params: Vec<TypePath> = parameters
                .iter()
                .map(|p| TypePath::new(&refs(&p.namespace), &refs(&p.types)))
                .collect();
            SymbolRef::method(&ns, &tys, &input.name, params)
        }
        KindInput::Getter => {
            SymbolRef::property(&ns, &tys, &input.name, PropertyAccess::Getter)
        }
        KindInput::Setter => {
            SymbolRef::property(&ns, &tys, &input.name, PropertyAccess::Setter)
        }
        KindInput::PlainProperty => {
            SymbolRef::property(&ns, &tys, &input.name, PropertyAccess::Plain)
        }
        KindInput::Field => SymbolRef::field(&ns, &tys, &input.name),
        KindInput::Event => SymbolRef::event(&ns, &tys, &input.name),
    };

    match input.assembly {
        Some(assembly) => symbol.in_assembly(&assembly),
        None => symbol,
    }
}

fuzz_target!(|input: SymbolInput| {
    // Size caps keep exploration in the interesting range.
    if input.namespace.len() > 16 || input.types.len() > 16 || input.name.len() > 256 {
        return;
    }
    if let KindInput::Method { parameters } = &input.kind {
        if parameters.len() > 16 {
            return;
        }
    }

    // An Event descriptor returns an error, not a panic.
    let _ = sandguard_domain::fuzz::canonicalize(&build_symbol(input));
});
