//! Orchestrator Module
//!
//! Wraps a single logical "generate prayers" operation with bounded
//! retries, exponential backoff, cooperative cancellation, and staged
//! phase notification, short-circuiting through the cache.

mod fetcher;
mod phase;
mod retry;
mod session;

pub use fetcher::{FetchOutcome, PrayerFetcher};
pub use phase::{LoggingObserver, NoopObserver, Phase, PhaseObserver};
pub use retry::RetryPolicy;
pub use session::FetchSession;
