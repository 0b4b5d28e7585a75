//! Token Cache - In-process cache service for a token listing site
//!
//! Bounds memory and item count, expires stale entries, evicts under
//! pressure and supports bulk/pattern invalidation, all under concurrent
//! access.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweeper_task;
