//! Compiled policy: whitelist and blacklist matcher sets plus the trusted
//! assembly set for one profile.

use crate::compile::{CompiledRule, compile};
use crate::error::Result;
use globset::{GlobSet, GlobSetBuilder};
use sandguard_settings::{Profile, RuleTables, rule_tables};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use tracing::debug;

/// One polarity of the access list, compiled for one-pass set matching.
///
/// `rules[i]` is the line (load index attached) whose matcher sits at
/// position `i` in the set, so set match indices map back to rule text.
#[derive(Clone, Debug)]
struct MatcherSet {
    set: GlobSet,
    rules: Vec<(usize, String)>,
}

impl MatcherSet {
    fn build(compiled: Vec<(usize, CompiledRule)>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut rules = Vec::with_capacity(compiled.len());
        for (load_index, rule) in compiled {
            builder.add(rule.glob);
            rules.push((load_index, rule.line));
        }

        Ok(Self {
            set: builder.build()?,
            rules,
        })
    }

    fn is_match(&self, key: &str) -> bool {
        self.set.is_match(key)
    }

    fn matching_rules<'a>(&'a self, key: &str) -> impl Iterator<Item = (usize, &'a str)> {
        self.set
            .matches(key)
            .into_iter()
            .map(move |i| (self.rules[i].0, self.rules[i].1.as_str()))
    }

    fn len(&self) -> usize {
        self.rules.len()
    }
}

/// An immutable compiled access list.
///
/// Construction never mutates previously returned sets; profile changes build
/// a fresh `PolicySet` and swap it in whole.
#[derive(Clone, Debug)]
pub struct PolicySet {
    profile: Profile,
    whitelist: MatcherSet,
    blacklist: MatcherSet,
    assemblies: BTreeSet<String>,
    fingerprint: String,
}

impl PolicySet {
    /// Compile the stock rule tables for a profile.
    pub fn build(profile: Profile) -> Result<Self> {
        Self::from_tables(&rule_tables(profile))
    }

    /// Compile a preset rule configuration.
    pub fn from_tables(config: &RuleTables) -> Result<Self> {
        Self::from_rules(config.profile, &config.assemblies, &config.rules)
    }

    /// Compile an explicit rule list.
    ///
    /// Any line failing to compile aborts the build: a silently dropped rule
    /// would change what the sandbox admits.
    pub fn from_rules(profile: Profile, assemblies: &[&str], rules: &[&str]) -> Result<Self> {
        let mut whitelist = Vec::new();
        let mut blacklist = Vec::new();

        for (load_index, line) in rules.iter().enumerate() {
            let rule = compile(line)?;
            if rule.negated {
                blacklist.push((load_index, rule));
            } else {
                whitelist.push((load_index, rule));
            }
        }

        let set = Self {
            profile,
            whitelist: MatcherSet::build(whitelist)?,
            blacklist: MatcherSet::build(blacklist)?,
            assemblies: assemblies.iter().map(|a| a.to_string()).collect(),
            fingerprint: fingerprint(profile, rules),
        };

        debug!(
            profile = set.profile.key(),
            whitelist = set.whitelist.len(),
            blacklist = set.blacklist.len(),
            fingerprint = %set.fingerprint,
            "access policy compiled"
        );

        Ok(set)
    }

    /// The profile this set was compiled for.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Whether a lookup key passes the access list. Blacklist membership is
    /// an absolute veto; otherwise whitelist membership decides.
    pub fn is_allowed(&self, key: &str) -> bool {
        !self.blacklist.is_match(key) && self.whitelist.is_match(key)
    }

    /// Whether a whole assembly is trusted for reference gating. Independent
    /// of per-symbol rule matching.
    pub fn is_assembly_trusted(&self, assembly: &str) -> bool {
        self.assemblies.contains(assembly)
    }

    /// Every rule line matching a lookup key, both polarities, in table load
    /// order. Diagnostics only; verdicts use `is_allowed`.
    pub fn matching_rules(&self, key: &str) -> Vec<&str> {
        let mut matched: Vec<(usize, &str)> = self
            .whitelist
            .matching_rules(key)
            .chain(self.blacklist.matching_rules(key))
            .collect();
        matched.sort_by_key(|(load_index, _)| *load_index);
        matched.into_iter().map(|(_, line)| line).collect()
    }

    /// Hex SHA-256 over the profile key and the exact rule lines in load
    /// order. Identifies the active rule revision in logs.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn whitelist_len(&self) -> usize {
        self.whitelist.len()
    }

    pub fn blacklist_len(&self) -> usize {
        self.blacklist.len()
    }
}

fn fingerprint(profile: Profile, rules: &[&str]) -> String {
    let mut parts = vec![profile.key()];
    parts.extend_from_slice(rules);
    let canonical = parts.join("\n");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
