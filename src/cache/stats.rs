//! Cache Statistics Module
//!
//! Point-in-time snapshot of store health for observability.

use serde::Serialize;

// == Cache Stats ==
/// Read-only snapshot of the store, taken without mutating it.
///
/// `expired_items` is computed by scanning entries at call time; expired
/// entries still occupy the table (and count toward `size`) until a
/// sweep or a lazy read removes them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Current number of entries in the table
    pub size: usize,
    /// Same as `size`; kept as a separate field for API compatibility
    pub total_items: usize,
    /// Entries past their expiry at snapshot time
    pub expired_items: usize,
    /// Configured item-count ceiling
    pub max_items: usize,
    /// Configured memory ceiling in MB
    #[serde(rename = "maxMemoryMB")]
    pub max_memory_mb: u64,
    /// True when the memory probe reads above 80% of `max_memory_mb`
    pub memory_pressure: bool,
}
