//! Prayer Gateway - a caching retrieval layer for generated prayers
//!
//! Sits between UI code and a slow, fallible generation API: a bounded
//! TTL/LRU cache keyed by normalized (tradition, situation) pairs, fronted
//! by a resilient fetch orchestrator with retries, backoff, and
//! cooperative cancellation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod orchestrator;
pub mod persist;

pub use api::AppState;
pub use config::Config;
pub use orchestrator::{FetchOutcome, FetchSession, PrayerFetcher};
