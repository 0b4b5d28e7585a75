//! Request DTOs for the admin cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for POST /cache/clear
///
/// `type` selects the scope: "all" and "tokens" both clear the whole
/// store; "expired" only triggers a reporting round. Anything else is
/// rejected with 400.
#[derive(Debug, Clone, Deserialize)]
pub struct ClearRequest {
    /// Clear scope: "all", "tokens" or "expired"
    #[serde(rename = "type")]
    pub clear_type: String,
}

/// Request body for POST /cache/invalidate
///
/// Exactly one of the fields drives the invalidation: `type: "tokens"`
/// clears the token namespace prefixes, `pattern` deletes keys
/// containing the literal substring. Neither supplied → 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvalidateRequest {
    /// Invalidation kind; only "tokens" is recognized
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Literal substring to delete matching keys for
    #[serde(default)]
    pub pattern: Option<String>,
}
