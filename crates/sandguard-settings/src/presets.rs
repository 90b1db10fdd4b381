use crate::profile::Profile;
use crate::tables;

/// The rule lines and trusted assemblies a profile selects, in load order.
///
/// This is raw configuration: lines are uncompiled and may carry `!` negation
/// markers. Compilation into matchers happens downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTables {
    pub profile: Profile,
    /// Assemblies trusted as a whole, in shipped order.
    pub assemblies: Vec<&'static str>,
    /// Rule lines in load order.
    pub rules: Vec<&'static str>,
}

/// Tables selected by a profile.
///
/// Keep profiles small and readable: they only append to the shipped tables,
/// never reorder or remove.
pub fn rule_tables(profile: Profile) -> RuleTables {
    match profile {
        Profile::Menu => menu_tables(),
        // default
        Profile::Unknown => base_tables(),
    }
}

fn base_tables() -> RuleTables {
    RuleTables {
        profile: Profile::Unknown,
        assemblies: tables::ASSEMBLY_WHITELIST.to_vec(),
        rules: load_order(),
    }
}

fn menu_tables() -> RuleTables {
    let mut t = base_tables();
    t.profile = Profile::Menu;
    t.rules.push(tables::MENU_RULE);
    t.assemblies.push(tables::MENU_ASSEMBLY);
    t
}

fn load_order() -> Vec<&'static str> {
    let mut rules = Vec::with_capacity(
        tables::BASE_ACCESS.len()
            + tables::TYPES.len()
            + tables::REFLECTION.len()
            + tables::EXCEPTIONS.len()
            + tables::DIAGNOSTICS.len()
            + tables::ASYNC.len(),
    );
    rules.extend_from_slice(tables::BASE_ACCESS);
    rules.extend_from_slice(tables::TYPES);
    rules.extend_from_slice(tables::REFLECTION);
    rules.extend_from_slice(tables::EXCEPTIONS);
    rules.extend_from_slice(tables::DIAGNOSTICS);
    rules.extend_from_slice(tables::ASYNC);
    rules
}
