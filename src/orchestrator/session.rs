//! Fetch Session Module
//!
//! Last-request-wins coordination: at most one outstanding fetch per
//! session. Starting a new fetch cancels any prior in-flight one.

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

// == Fetch Session ==
/// Hands out cancellation tokens with last-request-wins semantics.
#[derive(Debug, Default)]
pub struct FetchSession {
    current: Mutex<Option<CancellationToken>>,
}

impl FetchSession {
    pub fn new() -> Self {
        Self::default()
    }

    // == Begin ==
    /// Cancels the previously issued token (if any) and returns a fresh
    /// one for the new fetch.
    pub async fn begin(&self) -> CancellationToken {
        let mut current = self.current.lock().await;
        if let Some(previous) = current.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        *current = Some(token.clone());
        token
    }

    // == Cancel All ==
    /// Cancels the outstanding fetch without starting a new one
    /// (e.g. the caller is navigating away).
    pub async fn cancel(&self) {
        if let Some(previous) = self.current.lock().await.take() {
            previous.cancel();
        }
    }
}
