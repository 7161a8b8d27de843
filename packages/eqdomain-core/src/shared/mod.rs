//! Shared models and utilities

pub mod models;
pub mod worker_pool;
