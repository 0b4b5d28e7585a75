//! Cache Store Module
//!
//! Bounded key/value table combining TTL expiry with capacity and
//! memory-pressure eviction. The store is the single source of truth
//! for entry presence; callers share it behind `Arc<RwLock<_>>`.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::{current_timestamp_ms, CacheEntry};
use crate::cache::memory::{MemoryProbe, ProcStatusProbe};
use crate::cache::stats::CacheStats;

/// Share of `max_items` force-evicted when an expiry sweep cannot
/// relieve item-count pressure.
const ITEM_PRESSURE_EVICT_PCT: usize = 20;

/// Share of current entries force-evicted when an expiry sweep cannot
/// relieve memory pressure.
const MEMORY_PRESSURE_EVICT_PCT: usize = 30;

/// Probe fraction of `max_memory_mb` above which stats report pressure.
const MEMORY_PRESSURE_WARN_RATIO: f64 = 0.8;

// == Cache Store ==
/// In-memory cache with TTL expiry and creation-time-ordered eviction.
///
/// Both the item-count and memory ceilings are soft: they are enforced
/// opportunistically at write time, so the table can transiently exceed
/// them between writes.
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Maximum number of entries before item-count eviction kicks in
    max_items: usize,
    /// Memory ceiling in MB before memory eviction kicks in
    max_memory_mb: u64,
    /// Injected process-memory reading
    probe: Box<dyn MemoryProbe>,
    /// Monotonic insertion counter, tie-breaks eviction ordering
    next_seq: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructors ==
    /// Creates a store using the process RSS probe.
    ///
    /// # Arguments
    /// * `max_items` - Item-count ceiling
    /// * `max_memory_mb` - Memory ceiling in MB
    pub fn new(max_items: usize, max_memory_mb: u64) -> Self {
        Self::with_probe(max_items, max_memory_mb, Box::new(ProcStatusProbe))
    }

    /// Creates a store with an injected memory probe.
    pub fn with_probe(
        max_items: usize,
        max_memory_mb: u64,
        probe: Box<dyn MemoryProbe>,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            max_items,
            max_memory_mb,
            probe,
            next_seq: 0,
        }
    }

    // == Set ==
    /// Stores a value under `key` with the given TTL.
    ///
    /// Runs the capacity/memory check before inserting. Overwrites any
    /// existing entry wholesale (the creation timestamp resets, so an
    /// overwritten key becomes the newest for eviction ordering).
    ///
    /// A zero or negative TTL means the entry would already be expired;
    /// the write is skipped.
    pub fn set(&mut self, key: String, value: V, ttl_seconds: i64) {
        if ttl_seconds <= 0 {
            debug!(key = %key, ttl_seconds, "skipping write with non-positive TTL");
            return;
        }

        self.enforce_limits();

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries
            .insert(key, CacheEntry::new(value, ttl_seconds as u64, seq));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A missing or expired key returns `None`; the stale entry is
    /// removed as a side effect. No access-time bookkeeping is kept:
    /// reads never affect eviction ordering.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Has ==
    /// Checks for a live entry under `key`, with the same lazy-expiry
    /// semantics as [`get`](Self::get).
    pub fn has(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Expiry Sweep ==
    /// Deletes every entry whose expiry has passed.
    ///
    /// Used inline by the eviction policy and standalone by the
    /// background sweeper. Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| now > entry.expires_at)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.remove(key);
        }

        expired.len()
    }

    /// Returns the keys of currently-expired entries without removing
    /// them. The sweeper uses this under a read lock so its write-lock
    /// holds stay bounded.
    pub fn expired_keys(&self) -> Vec<String> {
        let now = current_timestamp_ms();
        self.entries
            .iter()
            .filter(|(_, entry)| now > entry.expires_at)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Removes the given keys if they are still expired, returning the
    /// number removed. Entries overwritten since they were observed
    /// expired are left alone.
    pub fn remove_expired_batch(&mut self, keys: &[String]) -> usize {
        let now = current_timestamp_ms();
        let mut removed = 0;
        for key in keys {
            if matches!(self.entries.get(key), Some(entry) if now > entry.expires_at) {
                self.entries.remove(key);
                removed += 1;
            }
        }
        removed
    }

    // == Eviction Policy ==
    /// Applies both pressure signals before an insert.
    ///
    /// Each signal first tries a cheap expiry sweep and only force-evicts
    /// live entries when the table is still over the limit afterward.
    fn enforce_limits(&mut self) {
        // Item-count pressure
        if self.entries.len() >= self.max_items {
            let swept = self.sweep_expired();
            debug!(swept, max_items = self.max_items, "item limit reached, swept expired entries");

            if self.entries.len() >= self.max_items {
                let count = (self.max_items * ITEM_PRESSURE_EVICT_PCT / 100).max(1);
                let evicted = self.evict_oldest(count);
                debug!(evicted, "evicted oldest entries for item-count pressure");
            }
        }

        // Memory pressure; a probe that cannot read means no pressure
        if let Some(used_mb) = self.probe.used_mb() {
            if used_mb > self.max_memory_mb as f64 {
                self.sweep_expired();

                let still_over = self
                    .probe
                    .used_mb()
                    .map(|mb| mb > self.max_memory_mb as f64)
                    .unwrap_or(false);
                if still_over && !self.entries.is_empty() {
                    let count = (self.entries.len() * MEMORY_PRESSURE_EVICT_PCT / 100).max(1);
                    let evicted = self.evict_oldest(count);
                    debug!(evicted, used_mb, "evicted oldest entries for memory pressure");
                }
            }
        }
    }

    /// Force-evicts up to `count` entries, oldest `created_at` first.
    ///
    /// Ordering is by creation time (insertion order), not last access.
    fn evict_oldest(&mut self, count: usize) -> usize {
        let mut ranked: Vec<(String, u64, u64)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.created_at, entry.seq))
            .collect();
        ranked.sort_unstable_by_key(|&(_, created_at, seq)| (created_at, seq));

        let mut evicted = 0;
        for (key, _, _) in ranked.into_iter().take(count) {
            self.entries.remove(&key);
            evicted += 1;
        }
        evicted
    }

    // == Pattern Delete ==
    /// Deletes every key containing `pattern` as a literal substring
    /// (not a regular expression). Returns the number deleted.
    pub fn delete_pattern(&mut self, pattern: &str) -> usize {
        let matches: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.contains(pattern))
            .cloned()
            .collect();

        for key in &matches {
            self.entries.remove(key);
        }

        matches.len()
    }

    // == Stats ==
    /// Takes a snapshot of store health without mutating the table:
    /// expired entries are counted, not removed.
    pub fn stats(&self) -> CacheStats {
        let now = current_timestamp_ms();
        let expired_items = self
            .entries
            .values()
            .filter(|entry| now > entry.expires_at)
            .count();

        let memory_pressure = self
            .probe
            .used_mb()
            .map(|mb| mb > self.max_memory_mb as f64 * MEMORY_PRESSURE_WARN_RATIO)
            .unwrap_or(false);

        CacheStats {
            size: self.entries.len(),
            total_items: self.entries.len(),
            expired_items,
            max_items: self.max_items,
            max_memory_mb: self.max_memory_mb,
            memory_pressure,
        }
    }

    // == Length ==
    /// Returns the current number of entries, expired included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
