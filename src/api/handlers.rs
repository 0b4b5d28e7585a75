//! API Handlers
//!
//! HTTP request handlers for the admin cache endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{
    invalidate_token_namespace, CacheStore, MemoryProbe, ProcStatusProbe,
    TOKEN_NAMESPACE_PATTERNS,
};
use crate::error::{ApiError, Result};
use crate::models::{
    CachedValue, ClearRequest, ClearResponse, HealthResponse, InvalidateRequest,
    InvalidateResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds the cache store behind `Arc<RwLock<>>` for thread-safe access,
/// plus the process start instant for uptime reporting.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore<CachedValue>>>,
    /// Server start time, for the stats endpoint
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore<CachedValue>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            started_at: Instant::now(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheStore::new(config.max_items, config.max_memory_mb))
    }
}

/// Handler for POST /cache/clear
///
/// "all" and "tokens" both clear the whole store; "expired" runs a
/// reporting round without forced deletion. Returns the store snapshot
/// before and after.
pub async fn clear_handler(
    State(state): State<AppState>,
    Json(req): Json<ClearRequest>,
) -> Result<Json<ClearResponse>> {
    match req.clear_type.as_str() {
        "all" | "tokens" => {
            let mut cache = state.cache.write().await;
            let before = cache.stats();
            cache.clear();
            let after = cache.stats();
            info!(clear_type = %req.clear_type, dropped = before.size, "cache cleared");

            Ok(Json(ClearResponse::new(&req.clear_type, true, before, after)))
        }
        "expired" => {
            // Reporting only; expired entries stay until swept or read
            let cache = state.cache.read().await;
            let before = cache.stats();
            let after = cache.stats();
            info!(expired = after.expired_items, "expired-entry report requested");

            Ok(Json(ClearResponse::new(&req.clear_type, false, before, after)))
        }
        other => Err(ApiError::InvalidRequest(format!(
            "Invalid cache type '{}'. Supported types: all, tokens, expired",
            other
        ))),
    }
}

/// Handler for POST /cache/invalidate
///
/// `type: "tokens"` invalidates the token namespace prefixes; `pattern`
/// deletes keys containing the literal substring. One of the two must be
/// supplied.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    if req.kind.as_deref() == Some("tokens") {
        let mut cache = state.cache.write().await;
        let deleted = invalidate_token_namespace(&mut cache);
        let patterns = TOKEN_NAMESPACE_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .collect();

        return Ok(Json(InvalidateResponse::new(deleted, patterns)));
    }

    match req.pattern.as_deref() {
        Some(pattern) if !pattern.is_empty() => {
            let mut cache = state.cache.write().await;
            let deleted = cache.delete_pattern(pattern);
            info!(pattern = %pattern, deleted, "pattern invalidation");

            Ok(Json(InvalidateResponse::new(
                deleted,
                vec![pattern.to_string()],
            )))
        }
        _ => Err(ApiError::InvalidRequest(
            "Invalid request. Provide 'type: tokens' or 'pattern: string'".to_string(),
        )),
    }
}

/// Handler for GET /cache/stats
///
/// Returns the store snapshot plus host process memory and uptime.
/// Collection never mutates the store.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = {
        let cache = state.cache.read().await;
        cache.stats()
    };

    let memory_usage = format_memory(ProcStatusProbe.used_mb());
    let uptime = format_uptime(state.started_at.elapsed().as_secs());

    Json(StatsResponse::new(stats, memory_usage, uptime))
}

/// Handler for GET /health
///
/// Returns liveness status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn format_memory(used_mb: Option<f64>) -> String {
    match used_mb {
        Some(mb) => format!("{:.2} MB", mb),
        None => "unknown".to_string(),
    }
}

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{}h {}m {}s", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{keys, FixedProbe};

    fn test_state() -> AppState {
        // Fixed probe keeps memory pressure out of these tests
        AppState::new(CacheStore::with_probe(
            100,
            100,
            Box::new(FixedProbe(Some(1.0))),
        ))
    }

    async fn seed(state: &AppState) {
        let mut cache = state.cache.write().await;
        cache.set(
            keys::token_count().to_string(),
            CachedValue::Count(7),
            600,
        );
        cache.set(
            keys::token_list(1, 20, "newest", None, None),
            CachedValue::Addresses(vec![]),
            600,
        );
        cache.set(
            keys::token_detail("0xAAA"),
            CachedValue::Count(1),
            600,
        );
    }

    #[tokio::test]
    async fn test_clear_all_empties_store() {
        let state = test_state();
        seed(&state).await;

        let req = ClearRequest {
            clear_type: "all".to_string(),
        };
        let response = clear_handler(State(state.clone()), Json(req)).await.unwrap();

        assert!(response.data.cleared);
        assert_eq!(response.data.before.size, 3);
        assert_eq!(response.data.after.size, 0);
        assert_eq!(state.cache.read().await.len(), 0);
    }

    #[tokio::test]
    async fn test_clear_expired_does_not_delete() {
        let state = test_state();
        seed(&state).await;

        let req = ClearRequest {
            clear_type: "expired".to_string(),
        };
        let response = clear_handler(State(state.clone()), Json(req)).await.unwrap();

        assert!(!response.data.cleared);
        assert_eq!(state.cache.read().await.len(), 3);
    }

    #[tokio::test]
    async fn test_clear_unknown_type_rejected() {
        let state = test_state();

        let req = ClearRequest {
            clear_type: "bogus".to_string(),
        };
        let result = clear_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_invalidate_tokens_leaves_detail_keys() {
        let state = test_state();
        seed(&state).await;

        let req = InvalidateRequest {
            kind: Some("tokens".to_string()),
            pattern: None,
        };
        let response = invalidate_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        assert_eq!(response.data.deleted_items, 2);
        assert_eq!(response.data.patterns.len(), 4);

        let mut cache = state.cache.write().await;
        assert!(cache.has(&keys::token_detail("0xAAA")));
    }

    #[tokio::test]
    async fn test_invalidate_by_pattern() {
        let state = test_state();
        seed(&state).await;

        let req = InvalidateRequest {
            kind: None,
            pattern: Some("token:detail".to_string()),
        };
        let response = invalidate_handler(State(state.clone()), Json(req))
            .await
            .unwrap();

        assert_eq!(response.data.deleted_items, 1);
        assert_eq!(response.data.patterns, vec!["token:detail".to_string()]);
    }

    #[tokio::test]
    async fn test_invalidate_without_type_or_pattern_rejected() {
        let state = test_state();

        let result =
            invalidate_handler(State(state), Json(InvalidateRequest::default())).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler_reports_snapshot() {
        let state = test_state();
        seed(&state).await;

        let response = stats_handler(State(state)).await;
        assert!(response.success);
        assert_eq!(response.data.stats.size, 3);
        assert!(response.data.uptime.contains('h'));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_memory(Some(12.345)), "12.35 MB");
        assert_eq!(format_memory(None), "unknown");
        assert_eq!(format_uptime(3723), "1h 2m 3s");
    }
}
