//! Symbol interning and the concurrent verdict cache.
//!
//! Symbols are interned once into stable dense ids; verdicts are cached per
//! id and thrown away whenever the active policy changes. Ids survive policy
//! changes so callers can hold them across a profile switch.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sandguard_types::SymbolRef;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Dense identifier for an interned symbol. Assigned once, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Assigns each distinct symbol a `SymbolId`, concurrently.
///
/// Two racing interns of the same symbol may both take the slow path; the
/// entry API makes exactly one id win and the loser's counter bump leaves a
/// gap in the id space, which nothing depends on being dense-packed.
#[derive(Debug, Default)]
pub struct SymbolInterner {
    ids: DashMap<SymbolRef, SymbolId>,
    next: AtomicU32,
}

impl SymbolInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&self, symbol: &SymbolRef) -> SymbolId {
        if let Some(id) = self.ids.get(symbol) {
            return *id;
        }

        *self
            .ids
            .entry(symbol.clone())
            .or_insert_with(|| SymbolId(self.next.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Point-in-time view of cache activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}

/// Concurrent allow/deny cache keyed by interned symbol id.
///
/// First writer wins: a verdict already present is never overwritten, so two
/// threads racing the same symbol agree on whichever evaluation landed first.
/// `clear` drops the verdicts but keeps the running hit/miss counters.
#[derive(Debug, Default)]
pub struct VerdictCache {
    verdicts: DashMap<SymbolId, bool>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl VerdictCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict unless one is already present. Returns whether this
    /// call stored the entry.
    pub fn try_cache(&self, id: SymbolId, allowed: bool) -> bool {
        match self.verdicts.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(allowed);
                true
            }
        }
    }

    /// Look up a cached verdict, counting the probe as a hit or miss.
    pub fn verdict(&self, id: SymbolId) -> Option<bool> {
        match self.verdicts.get(&id) {
            Some(allowed) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(*allowed)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Drop every cached verdict. Interned ids and counters are unaffected.
    pub fn clear(&self) {
        self.verdicts.clear();
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.verdicts.len(),
        }
    }
}
