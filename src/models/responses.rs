//! Response DTOs for the admin cache API
//!
//! All admin responses share the `{success, message, data}` envelope.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for POST /cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
    pub data: ClearData,
}

/// Payload of a clear response: whether entries were dropped, plus the
/// store snapshot before and after.
#[derive(Debug, Clone, Serialize)]
pub struct ClearData {
    pub cleared: bool,
    pub before: CacheStats,
    pub after: CacheStats,
}

impl ClearResponse {
    pub fn new(clear_type: &str, cleared: bool, before: CacheStats, after: CacheStats) -> Self {
        Self {
            success: true,
            message: format!("Cache cleared successfully (type: {})", clear_type),
            data: ClearData {
                cleared,
                before,
                after,
            },
        }
    }
}

/// Response body for POST /cache/invalidate
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub success: bool,
    pub message: String,
    pub data: InvalidateData,
}

/// Payload of an invalidate response: deletion count and the patterns
/// that were applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidateData {
    pub deleted_items: usize,
    pub patterns: Vec<String>,
}

impl InvalidateResponse {
    pub fn new(deleted_items: usize, patterns: Vec<String>) -> Self {
        Self {
            success: true,
            message: "Cache invalidated successfully".to_string(),
            data: InvalidateData {
                deleted_items,
                patterns,
            },
        }
    }
}

/// Response body for GET /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub message: String,
    pub data: StatsData,
}

/// Store snapshot plus host process figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Formatted process memory reading, e.g. "42.51 MB"
    pub memory_usage: String,
    /// Formatted process uptime, e.g. "1h 12m 3s"
    pub uptime: String,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, memory_usage: String, uptime: String) -> Self {
        Self {
            success: true,
            message: "Cache statistics retrieved successfully".to_string(),
            data: StatsData {
                stats,
                memory_usage,
                uptime,
            },
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> CacheStats {
        CacheStats {
            size: 5,
            total_items: 5,
            expired_items: 2,
            max_items: 100,
            max_memory_mb: 100,
            memory_pressure: false,
        }
    }

    #[test]
    fn test_clear_response_serialize() {
        let resp = ClearResponse::new("all", true, sample_stats(), CacheStats::default());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("type: all"));
        assert!(json.contains("\"before\""));
        assert!(json.contains("\"after\""));
    }

    #[test]
    fn test_invalidate_response_serialize() {
        let resp = InvalidateResponse::new(4, vec!["token:list".to_string()]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"deletedItems\":4"));
        assert!(json.contains("token:list"));
    }

    #[test]
    fn test_stats_response_flattens_snapshot() {
        let resp = StatsResponse::new(sample_stats(), "12.00 MB".to_string(), "0h 0m 1s".to_string());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"totalItems\":5"));
        assert!(json.contains("\"memoryUsage\":\"12.00 MB\""));
        assert!(json.contains("\"uptime\":\"0h 0m 1s\""));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("Something went wrong"));
    }
}
