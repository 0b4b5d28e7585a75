//! API Module
//!
//! HTTP handlers and routing for the admin cache API.
//!
//! # Endpoints
//! - `POST /cache/clear` - Clear the store (all/tokens/expired scopes)
//! - `POST /cache/invalidate` - Namespace or pattern invalidation
//! - `GET /cache/stats` - Store snapshot plus process figures
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
