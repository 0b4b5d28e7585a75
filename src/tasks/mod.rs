//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweeper: removes expired cache entries at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper_task;
