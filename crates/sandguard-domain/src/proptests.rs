//! Property tests over the rule compiler, policy evaluation, and the
//! canonicalizer. The invariants exercised here hold for any input:
//! - Literal rules match exactly their own text, whole-string anchored
//! - Wildcards extend across `.` and `/` separators
//! - Blacklist membership vetoes any whitelist match
//! - Canonicalization is deterministic

use crate::canonical::canonical_name;
use crate::compile::compile;
use crate::policy::PolicySet;
use proptest::prelude::*;
use sandguard_settings::Profile;
use sandguard_types::{PropertyAccess, SymbolRef, TypePath};

// ============================================================================
// Strategies
// ============================================================================

fn refs(parts: &[String]) -> Vec<&str> {
    parts.iter().map(String::as_str).collect()
}

/// Strategy for identifier segments as they appear in symbol names.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,11}").unwrap()
}

fn arb_namespace() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_segment(), 0..4)
}

/// Strategy for wildcard-free lookup keys in `Assembly/Dotted.Name` form.
fn arb_literal_key() -> impl Strategy<Value = String> {
    (arb_segment(), prop::collection::vec(arb_segment(), 1..4))
        .prop_map(|(assembly, parts)| format!("{assembly}/{}", parts.join(".")))
}

fn arb_type_path() -> impl Strategy<Value = TypePath> {
    (arb_namespace(), prop::collection::vec(arb_segment(), 1..3))
        .prop_map(|(ns, tys)| TypePath::new(&refs(&ns), &refs(&tys)))
}

fn arb_property_access() -> impl Strategy<Value = PropertyAccess> {
    prop_oneof![
        Just(PropertyAccess::Getter),
        Just(PropertyAccess::Setter),
        Just(PropertyAccess::Plain),
    ]
}

/// Strategy covering every symbol kind the canonicalizer supports.
fn arb_symbol() -> impl Strategy<Value = SymbolRef> {
    let parts = (
        arb_namespace(),
        prop::collection::vec(arb_segment(), 1..3),
        arb_segment(),
    );
    parts.prop_flat_map(|(ns, tys, name)| {
        let namespace_symbol = SymbolRef::namespace(&refs(&ns), &name);
        let type_symbol = SymbolRef::named_type(&refs(&ns), &refs(&tys), &name);
        let field_symbol = SymbolRef::field(&refs(&ns), &refs(&tys), &name);

        let method_symbol = {
            let (ns, tys, name) = (ns.clone(), tys.clone(), name.clone());
            prop::collection::vec(arb_type_path(), 0..3).prop_map(move |params| {
                SymbolRef::method(&refs(&ns), &refs(&tys), &name, params)
            })
        };
        let property_symbol = {
            let (ns, tys, name) = (ns.clone(), tys.clone(), name.clone());
            arb_property_access().prop_map(move |access| {
                SymbolRef::property(&refs(&ns), &refs(&tys), &name, access)
            })
        };

        prop_oneof![
            Just(namespace_symbol),
            Just(type_symbol),
            Just(field_symbol),
            method_symbol,
            property_symbol,
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn literal_rules_match_exactly_their_own_text(key in arb_literal_key()) {
        let rule = compile(&key).expect("literal line compiles");
        let matcher = rule.glob.compile_matcher();

        let appended = format!("{key}X");
        let prepended = format!("X{key}");
        prop_assert!(matcher.is_match(&key));
        prop_assert!(!matcher.is_match(&appended));
        prop_assert!(!matcher.is_match(&prepended));
        prop_assert!(!matcher.is_match(&key[..key.len() - 1]));
    }

    #[test]
    fn wildcard_extends_across_separators(
        prefix in arb_literal_key(),
        suffix in "[A-Za-z0-9_./]{0,16}",
    ) {
        let rule = compile(&format!("{prefix}*")).expect("wildcard line compiles");
        let matcher = rule.glob.compile_matcher();

        let extended = format!("{prefix}{suffix}");
        let prepended = format!("X{prefix}{suffix}");
        prop_assert!(matcher.is_match(&prefix));
        prop_assert!(matcher.is_match(&extended));
        prop_assert!(!matcher.is_match(&prepended));
    }

    #[test]
    fn blacklist_membership_always_vetoes(key in arb_literal_key()) {
        let negated = format!("!{key}");
        let set = PolicySet::from_rules(Profile::Unknown, &[], &["*", &negated])
            .expect("rules compile");

        let appended = format!("{key}X");
        prop_assert!(!set.is_allowed(&key));
        prop_assert!(set.is_allowed(&appended));
    }

    #[test]
    fn canonicalization_is_deterministic(symbol in arb_symbol()) {
        let first = canonical_name(&symbol).expect("supported kind");
        let second = canonical_name(&symbol).expect("supported kind");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn canonical_names_survive_literal_rule_compilation(symbol in arb_symbol()) {
        let name = canonical_name(&symbol).expect("supported kind");
        let key = format!("Some.Assembly/{name}");
        let rule = compile(&key).expect("canonical text compiles as a literal rule");
        prop_assert!(rule.glob.compile_matcher().is_match(&key));
    }
}
