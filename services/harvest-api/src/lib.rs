//! Harvest API Service Library
//!
//! Ingests one harvest report at startup and serves the resulting
//! collection read-only over HTTP.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod server;
pub mod state;
