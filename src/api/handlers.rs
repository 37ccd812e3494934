//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::{FetchError, Result};
use crate::models::{ClearResponse, HealthResponse, PrayerRequest, PrayerResponse, StatsResponse};
use crate::orchestrator::{FetchSession, LoggingObserver, PrayerFetcher};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The fetch orchestrator (owns the shared cache)
    pub fetcher: Arc<PrayerFetcher>,
    /// Last-request-wins cancellation coordination
    pub session: Arc<FetchSession>,
}

impl AppState {
    /// Creates a new AppState around a fetcher.
    pub fn new(fetcher: PrayerFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            session: Arc::new(FetchSession::new()),
        }
    }
}

/// Handler for POST /prayers
///
/// Retrieves prayers for a (tradition, situation) pair, served from cache
/// when fresh. Starting a new request cancels any prior in-flight one;
/// the superseded request answers 409.
pub async fn prayers_handler(
    State(state): State<AppState>,
    Json(req): Json<PrayerRequest>,
) -> Result<Json<PrayerResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(FetchError::InvalidRequest(error_msg));
    }

    let cancel = state.session.begin().await;
    let outcome = state
        .fetcher
        .fetch(&req.tradition, &req.situation, &LoggingObserver, &cancel)
        .await?;

    Ok(Json(PrayerResponse::from(outcome)))
}

/// Handler for DELETE /cache
///
/// Empties the prayer cache.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cache = state.fetcher.cache();
    let mut cache = cache.write().await;
    let removed = cache.len();
    cache.clear();

    Json(ClearResponse::new(removed))
}

/// Handler for GET /stats
///
/// Returns cache effectiveness counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.fetcher.cache();
    let cache = cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        cache.len(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the gateway.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
