//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached value with its creation and expiry timestamps.
///
/// Entries are immutable once created; overwriting a key replaces the
/// whole entry, timestamps included.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Insertion sequence assigned by the store; breaks creation-time
    /// ties so eviction order stays oldest-inserted-first within one
    /// millisecond
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds (must be positive; the store
    ///   skips the write for zero/negative TTLs)
    /// * `seq` - Insertion sequence number from the owning store
    pub fn new(value: V, ttl_seconds: u64, seq: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// strictly greater than the expiration time, so an entry with
    /// `expires_at == now` is still served.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
