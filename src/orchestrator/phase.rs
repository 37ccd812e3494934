//! Fetch Phase Module
//!
//! Staged progress notification for an in-flight fetch.

use tracing::debug;

// == Phase ==
/// Progress stages of one fetch attempt, in order.
///
/// A retry re-enters `Searching`; `Finalizing` fires once a raw response
/// is in hand, before shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Generating,
    Finalizing,
}

impl Phase {
    /// Stable lowercase name, suitable for UI status lines and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Searching => "searching",
            Phase::Generating => "generating",
            Phase::Finalizing => "finalizing",
        }
    }
}

// == Phase Observer ==
/// Listener for phase transitions.
///
/// Observers must be cheap and non-blocking; they are invoked inline on
/// the fetch path.
pub trait PhaseObserver: Send + Sync {
    fn on_phase(&self, phase: Phase);
}

// == Noop Observer ==
/// Used when the caller does not care about progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {
    fn on_phase(&self, _phase: Phase) {}
}

// == Logging Observer ==
/// Surfaces phase transitions as debug logs; the HTTP layer uses this
/// since it has no channel for incremental progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl PhaseObserver for LoggingObserver {
    fn on_phase(&self, phase: Phase) {
        debug!(phase = phase.as_str(), "Fetch phase change");
    }
}
