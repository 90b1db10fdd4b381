use rayon::prelude::*;
use sandguard_domain::AccessEngine;
use sandguard_settings::{Profile, RuleTables};
use sandguard_types::{PropertyAccess, SymbolRef, TypePath};

fn engine() -> AccessEngine {
    AccessEngine::new(Profile::Unknown).expect("stock tables compile")
}

fn allowed(engine: &AccessEngine, symbol: &SymbolRef) -> bool {
    engine.is_symbol_allowed(symbol).expect("symbol evaluates")
}

fn type_path(namespace: &[&str], name: &str) -> TypePath {
    TypePath::simple(namespace, name)
}

#[test]
fn immutable_collections_namespace_is_allowed_without_an_assembly() {
    let engine = engine();
    let namespace = SymbolRef::namespace(&["System", "Collections"], "Immutable");
    assert!(allowed(&engine, &namespace));
}

#[test]
fn object_type_is_allowed() {
    let engine = engine();
    let object =
        SymbolRef::named_type(&["System"], &[], "Object").in_assembly("System.Private.CoreLib");
    assert!(allowed(&engine, &object));
}

#[test]
fn uri_type_is_allowed_from_its_own_assembly() {
    let engine = engine();
    let uri = SymbolRef::named_type(&["System"], &[], "Uri").in_assembly("System.Private.Uri");
    assert!(allowed(&engine, &uri));
}

#[test]
fn uri_type_is_allowed_from_a_facade_assembly_via_alternates() {
    let engine = engine();
    let uri = SymbolRef::named_type(&["System"], &[], "Uri").in_assembly("System.Runtime");
    assert!(allowed(&engine, &uri));
}

#[test]
fn type_equality_operator_is_allowed() {
    let engine = engine();
    let op = SymbolRef::method(
        &["System"],
        &["Type"],
        "op_Equality",
        vec![type_path(&["System"], "Type"), type_path(&["System"], "Type")],
    )
    .in_assembly("System.Private.CoreLib");
    assert!(allowed(&engine, &op));
}

#[test]
fn reflection_assembly_type_is_denied() {
    let engine = engine();
    let assembly = SymbolRef::named_type(&["System", "Reflection"], &[], "Assembly")
        .in_assembly("System.Private.CoreLib");
    assert!(!allowed(&engine, &assembly));
}

#[test]
fn get_executing_assembly_is_denied() {
    let engine = engine();
    let method = SymbolRef::method(
        &["System", "Reflection"],
        &["Assembly"],
        "GetExecutingAssembly",
        vec![],
    )
    .in_assembly("System.Private.CoreLib");
    assert!(!allowed(&engine, &method));
}

#[test]
fn denied_symbols_format_into_the_host_diagnostic() {
    let engine = engine();
    let method = SymbolRef::method(
        &["System", "Reflection"],
        &["Assembly"],
        "GetExecutingAssembly",
        vec![],
    )
    .in_assembly("System.Private.CoreLib");

    assert!(!allowed(&engine, &method));
    let name = engine.canonical_name(&method).expect("method canonicalizes");
    assert_eq!(
        sandguard_types::ids::denial_message(&name),
        "'System.Reflection.Assembly.GetExecutingAssembly()' is not permitted by the code access list"
    );
    assert_eq!(sandguard_types::ids::DIAG_ACCESS_LIST, "SB9001");
}

#[test]
fn base_type_getter_is_denied_while_the_type_itself_is_allowed() {
    let engine = engine();
    let ty = SymbolRef::named_type(&["System"], &[], "Type").in_assembly("System.Private.CoreLib");
    let getter = SymbolRef::property(&["System"], &["Type"], "BaseType", PropertyAccess::Getter)
        .in_assembly("System.Private.CoreLib");

    assert!(allowed(&engine, &ty));
    assert!(!allowed(&engine, &getter));
}

#[test]
fn environment_allows_thread_id_reads_but_not_directory_writes() {
    let engine = engine();
    let thread_id = SymbolRef::property(
        &["System"],
        &["Environment"],
        "CurrentManagedThreadId",
        PropertyAccess::Getter,
    )
    .in_assembly("System.Private.CoreLib");
    let set_directory = SymbolRef::property(
        &["System"],
        &["Environment"],
        "CurrentDirectory",
        PropertyAccess::Setter,
    )
    .in_assembly("System.Private.CoreLib");

    assert!(allowed(&engine, &thread_id));
    assert!(!allowed(&engine, &set_directory));
}

#[test]
fn generic_arguments_never_reach_the_lookup_key() {
    let engine = engine();
    // A closed Dictionary<TKey, TValue> use resolves to the bare definition.
    let dictionary =
        SymbolRef::named_type(&["System", "Collections", "Generic"], &[], "Dictionary")
            .in_assembly("System.Private.CoreLib");
    assert!(allowed(&engine, &dictionary));
    assert_eq!(
        engine.canonical_name(&dictionary).expect("type canonicalizes"),
        "System.Collections.Generic.Dictionary"
    );
}

#[test]
fn menu_profile_admits_menu_code_and_unknown_does_not() {
    let engine = engine();
    let panel = SymbolRef::named_type(&["Sandbox", "Menu"], &[], "NavigatorPanel")
        .in_assembly("Sandbox.Menu");

    assert!(!allowed(&engine, &panel));
    assert!(!engine.is_assembly_trusted("Sandbox.Menu"));

    engine.set_profile(Profile::Menu).expect("menu tables compile");
    assert!(allowed(&engine, &panel));
    assert!(engine.is_assembly_trusted("Sandbox.Menu"));
}

#[test]
fn blacklist_rules_veto_broader_whitelists() {
    let engine = AccessEngine::from_tables(&RuleTables {
        profile: Profile::Unknown,
        assemblies: vec![],
        rules: vec![
            "Game.Api/System.Reflection.*",
            "!Game.Api/System.Reflection.Assembly*",
        ],
    })
    .expect("rules compile");

    let member_info = SymbolRef::named_type(&["System", "Reflection"], &[], "MemberInfo")
        .in_assembly("Game.Api");
    let assembly =
        SymbolRef::named_type(&["System", "Reflection"], &[], "Assembly").in_assembly("Game.Api");

    assert!(allowed(&engine, &member_info));
    assert!(!allowed(&engine, &assembly));
}

#[test]
fn repeated_evaluations_hit_the_cache() {
    let engine = engine();
    let object =
        SymbolRef::named_type(&["System"], &[], "Object").in_assembly("System.Private.CoreLib");

    for _ in 0..5 {
        assert!(allowed(&engine, &object));
    }

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 4);
    assert_eq!(stats.entries, 1);
}

#[test]
fn duplicate_table_lines_collapse_in_rule_traces() {
    let engine = engine();
    let getter = SymbolRef::property(
        &["System", "Reflection"],
        &["MemberInfo"],
        "Name",
        PropertyAccess::Getter,
    )
    .in_assembly("System.Private.CoreLib");

    assert!(allowed(&engine, &getter));
    let lines = engine.matching_rules(&getter).expect("property canonicalizes");
    let hits = lines
        .iter()
        .filter(|line| {
            line.as_str() == "System.Private.CoreLib/System.Reflection.MemberInfo.get_Name()"
        })
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn matching_rules_explain_the_verdict() {
    let engine = engine();
    let op = SymbolRef::method(
        &["System"],
        &["Type"],
        "op_Equality",
        vec![type_path(&["System"], "Type"), type_path(&["System"], "Type")],
    )
    .in_assembly("System.Private.CoreLib");

    let lines = engine.matching_rules(&op).expect("method canonicalizes");
    assert!(lines.contains(
        &"System.Private.CoreLib/System.Type.op_Equality( System.Type, System.Type )".to_string()
    ));
}

#[test]
fn concurrent_evaluations_agree_with_sequential_verdicts() {
    let symbols: Vec<SymbolRef> = (0..64)
        .map(|i| match i % 4 {
            0 => SymbolRef::named_type(&["System"], &[], "Object")
                .in_assembly("System.Private.CoreLib"),
            1 => SymbolRef::named_type(&["System", "Reflection"], &[], "Assembly")
                .in_assembly("System.Private.CoreLib"),
            2 => SymbolRef::namespace(&["System", "Collections"], "Immutable"),
            _ => SymbolRef::property(
                &["System"],
                &["Environment"],
                "CurrentManagedThreadId",
                PropertyAccess::Getter,
            )
            .in_assembly("System.Private.CoreLib"),
        })
        .collect();

    let sequential_engine = engine();
    let sequential: Vec<bool> = symbols
        .iter()
        .map(|symbol| allowed(&sequential_engine, symbol))
        .collect();

    let parallel_engine = engine();
    let parallel: Vec<bool> = symbols
        .par_iter()
        .map(|symbol| {
            parallel_engine
                .is_symbol_allowed(symbol)
                .expect("symbol evaluates")
        })
        .collect();

    assert_eq!(sequential, parallel);
    assert_eq!(parallel_engine.cache_stats().entries, 4);
    assert_eq!(parallel_engine.interned_symbols(), 4);
}

#[test]
fn canonical_rendering_battery() {
    let engine = engine();
    let render = |symbol: &SymbolRef| engine.canonical_name(symbol).expect("supported kind");

    insta::assert_snapshot!(
        render(&SymbolRef::named_type(&["System"], &[], "String")),
        @"System.String"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::named_type(&[], &[], "Program")),
        @".Program"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::named_type(
            &["System", "Collections", "Generic"],
            &["Dictionary"],
            "Enumerator"
        )),
        @"System.Collections.Generic.Dictionary.Enumerator"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::method(
            &["System", "Threading", "Tasks"],
            &["Task"],
            "Yield",
            vec![]
        )),
        @"System.Threading.Tasks.Task.Yield()"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::method(
            &["System"],
            &["Buffer"],
            "BlockCopy",
            vec![
                type_path(&["System"], "Array"),
                type_path(&["System"], "Int32"),
                type_path(&["System"], "Array"),
                type_path(&["System"], "Int32"),
                type_path(&["System"], "Int32"),
            ]
        )),
        @"System.Buffer.BlockCopy( System.Array, System.Int32, System.Array, System.Int32, System.Int32 )"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::method(
            &["System", "IO"],
            &["MemoryStream"],
            ".ctor",
            vec![type_path(&["System", "IO"], "Stream")]
        )),
        @"System.IO.MemoryStream..ctor( System.IO.Stream )"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::property(
            &["Sandbox"],
            &["PhysicsBody"],
            "Mass",
            PropertyAccess::Getter
        )),
        @"Sandbox.PhysicsBody.get_Mass()"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::property(
            &["Sandbox"],
            &["PhysicsBody"],
            "Mass",
            PropertyAccess::Setter
        )),
        @"Sandbox.PhysicsBody.set_Mass()"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::property(
            &["Sandbox"],
            &["PhysicsBody"],
            "Mass",
            PropertyAccess::Plain
        )),
        @"Sandbox.PhysicsBody.Mass"
    );
    insta::assert_snapshot!(
        render(&SymbolRef::field(&["System"], &["TimeSpan"], "MaxValue")),
        @"System.TimeSpan.MaxValue"
    );
}
