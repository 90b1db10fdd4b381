//! The access engine: one shared policy, an interner, and a verdict cache.
//!
//! Hosts construct one engine per analysis session and call
//! [`AccessEngine::is_symbol_allowed`] from however many threads the
//! compilation fans out to. Profile changes swap the whole compiled policy
//! and drop cached verdicts.

use crate::cache::{CacheStats, SymbolInterner, VerdictCache};
use crate::canonical;
use crate::error::Result;
use crate::policy::PolicySet;
use parking_lot::RwLock;
use sandguard_settings::{Profile, RuleTables, tables};
use sandguard_types::SymbolRef;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct AccessEngine {
    policy: RwLock<Arc<PolicySet>>,
    interner: SymbolInterner,
    cache: VerdictCache,
    alternate_assemblies: Vec<String>,
}

impl AccessEngine {
    /// Engine over the stock rule tables for a profile, with the standard
    /// alternate assembly fallbacks.
    pub fn new(profile: Profile) -> Result<Self> {
        Self::with_alternates(profile, tables::ALTERNATE_ASSEMBLIES.iter().copied())
    }

    /// Engine over the stock rule tables with an explicit alternate assembly
    /// list, tried in the given order.
    pub fn with_alternates<I, S>(profile: Profile, alternates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let policy = PolicySet::build(profile)?;
        Ok(Self::from_policy(policy, alternates))
    }

    /// Engine over an explicit rule configuration, with the standard
    /// alternate assembly fallbacks.
    pub fn from_tables(config: &RuleTables) -> Result<Self> {
        let policy = PolicySet::from_tables(config)?;
        Ok(Self::from_policy(
            policy,
            tables::ALTERNATE_ASSEMBLIES.iter().copied(),
        ))
    }

    fn from_policy<I, S>(policy: PolicySet, alternates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            policy: RwLock::new(Arc::new(policy)),
            interner: SymbolInterner::new(),
            cache: VerdictCache::new(),
            alternate_assemblies: alternates.into_iter().map(Into::into).collect(),
        }
    }

    /// The profile the active policy was compiled for.
    pub fn profile(&self) -> Profile {
        self.policy.read().profile()
    }

    /// Snapshot of the active policy. The snapshot stays valid (and
    /// unchanged) even if the profile is switched afterwards.
    pub fn policy(&self) -> Arc<PolicySet> {
        Arc::clone(&self.policy.read())
    }

    /// Switch to another profile's rule tables.
    ///
    /// Equal profile is a no-op. Otherwise the new policy is compiled before
    /// the swap, so a compile failure leaves the active policy in place; the
    /// verdict cache is cleared after publishing. Evaluations overlapping the
    /// swap resolve against whichever policy they snapshotted.
    pub fn set_profile(&self, profile: Profile) -> Result<()> {
        if self.profile() == profile {
            return Ok(());
        }

        let next = Arc::new(PolicySet::build(profile)?);
        let fingerprint = next.fingerprint().to_string();
        *self.policy.write() = next;
        self.cache.clear();

        debug!(
            profile = profile.key(),
            fingerprint = %fingerprint,
            "profile changed, verdict cache cleared"
        );
        Ok(())
    }

    /// Whether a symbol reference passes the access list.
    ///
    /// The verdict is computed once per distinct symbol and served from the
    /// cache afterwards. A symbol kind the canonicalizer does not cover is an
    /// error and caches nothing.
    pub fn is_symbol_allowed(&self, symbol: &SymbolRef) -> Result<bool> {
        let id = self.interner.intern(symbol);
        if let Some(allowed) = self.cache.verdict(id) {
            return Ok(allowed);
        }

        let name = canonical::canonical_name(symbol)?;
        let policy = self.policy();
        let allowed = self.evaluate(&policy, symbol, &name);

        self.cache.try_cache(id, allowed);
        Ok(allowed)
    }

    fn evaluate(&self, policy: &PolicySet, symbol: &SymbolRef, name: &str) -> bool {
        let primary = match symbol.assembly.as_deref() {
            Some(assembly) => policy.is_allowed(&lookup_key(assembly, name)),
            None => policy.is_allowed(name),
        };
        if primary {
            return true;
        }

        for alternate in &self.alternate_assemblies {
            if policy.is_allowed(&lookup_key(alternate, name)) {
                trace!(
                    symbol = name,
                    alternate = alternate.as_str(),
                    "allowed via alternate assembly"
                );
                return true;
            }
        }

        trace!(symbol = name, "not in access list");
        false
    }

    /// Canonical dotted form of a symbol, as used in lookup keys and denial
    /// diagnostics.
    pub fn canonical_name(&self, symbol: &SymbolRef) -> Result<String> {
        canonical::canonical_name(symbol)
    }

    /// Whether a whole assembly is trusted for reference gating.
    pub fn is_assembly_trusted(&self, assembly: &str) -> bool {
        self.policy.read().is_assembly_trusted(assembly)
    }

    /// Every rule line matching any of the symbol's candidate lookup keys
    /// (primary first, then alternates), in table load order per key.
    /// Diagnostics only.
    pub fn matching_rules(&self, symbol: &SymbolRef) -> Result<Vec<String>> {
        let name = canonical::canonical_name(symbol)?;
        let policy = self.policy();

        let mut keys = Vec::with_capacity(1 + self.alternate_assemblies.len());
        match symbol.assembly.as_deref() {
            Some(assembly) => keys.push(lookup_key(assembly, &name)),
            None => keys.push(name.clone()),
        }
        for alternate in &self.alternate_assemblies {
            let key = lookup_key(alternate, &name);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let mut lines: Vec<String> = Vec::new();
        for key in &keys {
            for line in policy.matching_rules(key) {
                if !lines.iter().any(|known| known == line) {
                    lines.push(line.to_string());
                }
            }
        }
        Ok(lines)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Count of distinct symbols interned so far. Ids persist across profile
    /// changes.
    pub fn interned_symbols(&self) -> usize {
        self.interner.len()
    }
}

fn lookup_key(assembly: &str, name: &str) -> String {
    format!("{assembly}/{name}")
}
