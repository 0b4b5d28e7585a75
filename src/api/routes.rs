//! API Routes
//!
//! Configures the Axum router with the admin cache endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, health_handler, invalidate_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /cache/clear` - Clear the store (all/tokens/expired scopes)
/// - `POST /cache/invalidate` - Namespace or pattern invalidation
/// - `GET /cache/stats` - Store snapshot plus process figures
/// - `GET /health` - Health check endpoint
///
/// Requests with a known path but wrong method get 405 from the method
/// routing.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/cache/clear", post(clear_handler))
        .route("/cache/invalidate", post(invalidate_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
