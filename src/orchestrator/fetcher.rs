//! Prayer Fetcher Module
//!
//! The resilient request orchestrator: consults the cache, runs the
//! generator through a retry loop with exponential backoff, races every
//! wait against the caller's cancellation token, and stores successful
//! results back into the cache.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::PrayerCache;
use crate::error::{FetchError, Result};
use crate::generate::{GenerateError, Prayer, PrayerGenerator, SourceRef};
use crate::orchestrator::{Phase, PhaseObserver, RetryPolicy};

// == Fetch Outcome ==
/// Successful result of one fetch, with cache provenance.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub prayers: Vec<Prayer>,
    pub sources: Vec<SourceRef>,
    pub served_from_cache: bool,
}

// == Prayer Fetcher ==
/// Explicitly constructed, injectable fetch service. Holds the shared
/// cache and the generator seam; no globals, so tests can instantiate
/// isolated instances.
pub struct PrayerFetcher {
    cache: Arc<RwLock<PrayerCache>>,
    generator: Arc<dyn PrayerGenerator>,
    policy: RetryPolicy,
}

impl PrayerFetcher {
    // == Constructor ==
    pub fn new(
        cache: Arc<RwLock<PrayerCache>>,
        generator: Arc<dyn PrayerGenerator>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            cache,
            generator,
            policy,
        }
    }

    /// Shared handle to the underlying cache (stats and clear endpoints).
    pub fn cache(&self) -> Arc<RwLock<PrayerCache>> {
        Arc::clone(&self.cache)
    }

    // == Fetch ==
    /// Fetches prayers for a (tradition, situation) pair.
    ///
    /// Cache hits return immediately with `served_from_cache = true`. On a
    /// miss, the generator runs under the retry policy: transient failures
    /// back off and retry, an invalid response is terminal, and a raised
    /// cancellation token surfaces as [`FetchError::Cancelled`] from any
    /// point in the flow - including mid-generation and mid-backoff -
    /// without consuming another attempt or writing a cache entry.
    pub async fn fetch(
        &self,
        tradition: &str,
        situation: &str,
        observer: &dyn PhaseObserver,
        cancel: &CancellationToken,
    ) -> Result<FetchOutcome> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        // Write lock even for lookup: hits mutate access time and LRU order
        if let Some(hit) = self.cache.write().await.lookup(tradition, situation) {
            debug!(%tradition, "Serving prayers from cache");
            return Ok(FetchOutcome {
                prayers: hit.prayers,
                sources: hit.sources,
                served_from_cache: true,
            });
        }

        let mut last_failure = String::new();

        for attempt in 1..=self.policy.max_attempts {
            if let Some(delay) = self.policy.delay_before(attempt) {
                // Re-check before sleeping, race the sleep itself, and
                // check again after waking
                if cancel.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
                debug!(attempt, ?delay, "Backing off before retry");
                tokio::select! {
                    _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
                if cancel.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
            }

            observer.on_phase(Phase::Searching);
            observer.on_phase(Phase::Generating);

            let raw = tokio::select! {
                _ = cancel.cancelled() => return Err(FetchError::Cancelled),
                raw = self.generator.generate(tradition, situation) => raw,
            };

            match raw {
                Ok(result) => {
                    observer.on_phase(Phase::Finalizing);

                    // A response that parses but has the wrong shape is a
                    // prompting/schema bug; retrying would only mask it
                    if let Err(reason) = result.validate_shape() {
                        warn!(attempt, %reason, "Generation returned an invalid shape");
                        return Err(FetchError::InvalidResponse(reason));
                    }

                    // A superseded request must not write a cache entry
                    if cancel.is_cancelled() {
                        return Err(FetchError::Cancelled);
                    }

                    self.cache
                        .write()
                        .await
                        .store(tradition, situation, result.clone());

                    return Ok(FetchOutcome {
                        prayers: result.prayers,
                        sources: result.sources,
                        served_from_cache: false,
                    });
                }
                Err(GenerateError::InvalidResponse(reason)) => {
                    warn!(attempt, %reason, "Generation returned an invalid response");
                    return Err(FetchError::InvalidResponse(reason));
                }
                Err(GenerateError::Transport(reason)) => {
                    warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        %reason,
                        "Generation attempt failed"
                    );
                    last_failure = reason;
                }
            }
        }

        Err(FetchError::Transient(last_failure))
    }
}
