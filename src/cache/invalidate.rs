//! Bulk Invalidation Module
//!
//! Pattern-based deletion used when upstream state is known to have
//! changed, e.g. after a new token launches.

use tracing::info;

use crate::cache::store::CacheStore;

// == Namespace Patterns ==
/// Prefixes cleared by a token-namespace invalidation.
///
/// Per-address detail and metadata keys are intentionally absent: those
/// expire on their own TTL.
pub const TOKEN_NAMESPACE_PATTERNS: [&str; 4] = [
    "token:count",
    "token:addresses",
    "token:contract:data",
    "token:list",
];

// == Namespace Invalidation ==
/// Deletes every key under the fixed token namespace prefixes, returning
/// the total number of entries removed.
pub fn invalidate_token_namespace<V: Clone>(store: &mut CacheStore<V>) -> usize {
    let total: usize = TOKEN_NAMESPACE_PATTERNS
        .iter()
        .map(|pattern| store.delete_pattern(pattern))
        .sum();

    info!(deleted = total, "invalidated token namespace");
    total
}
