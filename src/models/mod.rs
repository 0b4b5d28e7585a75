//! Request, response and payload models
//!
//! DTOs for the admin HTTP API plus the typed payload shapes stored in
//! the cache.

pub mod payloads;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use payloads::{CachedValue, Pagination, TokenData, TokenInfo, TokenListPage, TokenMetadata};
pub use requests::{ClearRequest, InvalidateRequest};
pub use responses::{
    ClearResponse, ErrorResponse, HealthResponse, InvalidateResponse, StatsResponse,
};
