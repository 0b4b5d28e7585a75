//! Cache Key Builders
//!
//! Pure functions mapping domain query shapes to canonical cache keys.
//! Semantically identical queries always produce identical keys; any
//! parameter difference produces a different key.

use std::time::{SystemTime, UNIX_EPOCH};

use url::form_urlencoded;

// == Fixed Namespace Keys ==
/// Key for the total token count.
pub fn token_count() -> &'static str {
    "token:count"
}

/// Key for the raw contract data snapshot.
pub fn token_contract_data() -> &'static str {
    "token:contract:data"
}

/// Key for the token address list.
pub fn token_addresses() -> &'static str {
    "token:addresses"
}

// == Parameterized Keys ==
/// Key for one page of the token list.
///
/// Parameters are encoded in a fixed order (page, limit, sort, launched,
/// search) so identical queries collide. An absent `launched` filter and
/// an absent or empty `search` term are omitted entirely.
pub fn token_list(
    page: u32,
    limit: u32,
    sort: &str,
    launched: Option<&str>,
    search: Option<&str>,
) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("page", &page.to_string());
    params.append_pair("limit", &limit.to_string());
    params.append_pair("sort", sort);

    if let Some(launched) = launched {
        params.append_pair("launched", launched);
    }

    if let Some(search) = search {
        if !search.is_empty() {
            params.append_pair("search", search);
        }
    }

    format!("token:list:{}", params.finish())
}

/// Key for a single token detail record, case-insensitive on address.
pub fn token_detail(address: &str) -> String {
    format!("token:detail:{}", address.to_lowercase())
}

/// Key for a single token metadata record, case-insensitive on address.
pub fn token_metadata(address: &str) -> String {
    format!("token:metadata:{}", address.to_lowercase())
}

/// Key for a batch metadata fetch.
///
/// Addresses are lower-cased and sorted, so input order and case never
/// change the key.
pub fn batch_token_metadata(addresses: &[String]) -> String {
    let mut sorted: Vec<String> = addresses.iter().map(|a| a.to_lowercase()).collect();
    sorted.sort();
    format!("token:metadata:batch:{}", sorted.join(","))
}

// == Forced-Refresh Keys ==
/// Appends a coarse time bucket to a key, rotating it every
/// `window_minutes` so callers can force periodic refreshes.
pub fn timestamped_key(key: &str, window_minutes: u64) -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64;
    let bucket = now_ms / (window_minutes * 60 * 1000);
    format!("{}:{}", key, bucket)
}

// == Per-Namespace TTLs ==
/// TTLs in seconds for each key namespace.
///
/// Count, list, addresses and contract data are kept short so new tokens
/// surface quickly; metadata is effectively permanent.
pub mod ttl {
    /// Token count: 10 seconds
    pub const TOKEN_COUNT: i64 = 10;
    /// Token list pages: 30 seconds
    pub const TOKEN_LIST: i64 = 30;
    /// Token detail: 5 minutes
    pub const TOKEN_DETAIL: i64 = 300;
    /// Token metadata: ~1 year
    pub const TOKEN_METADATA: i64 = 86_400 * 365;
    /// Raw contract data: 10 seconds
    pub const CONTRACT_DATA: i64 = 10;
    /// Token address list: 30 seconds
    pub const TOKEN_ADDRESSES: i64 = 30;
    /// Retry window after a failed metadata fetch: 5 minutes
    pub const METADATA_RETRY: i64 = 300;
}
