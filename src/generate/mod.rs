//! Generation Module
//!
//! Abstracts the external prayer generation capability behind a trait so
//! the cache and orchestrator never know it is backed by a remote AI API.

mod http;

pub use http::HttpGenerator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// == Public Constants ==
/// Number of prayers a well-formed generation result carries
pub const EXPECTED_PRAYER_COUNT: usize = 3;

// == Prayer ==
/// A single generated or canonical prayer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prayer {
    pub title: String,
    pub body: String,
    /// Short explanation of the prayer's relevance to the situation
    pub explanation: String,
    /// True when the text is an established prayer rather than a composition
    pub is_canonical: bool,
    /// Human-readable provenance label (e.g. tradition or collection name)
    pub origin_label: String,
}

// == Source Reference ==
/// Citation backing a generation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub title: String,
    pub uri: String,
}

// == Generation Result ==
/// The payload returned by one generation call: an ordered list of prayer
/// records plus source citations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub prayers: Vec<Prayer>,
    pub sources: Vec<SourceRef>,
}

impl GenerationResult {
    /// Validates the structural shape of a parsed generation result.
    ///
    /// A result that parses but fails this check is a terminal failure:
    /// retrying would only mask a prompting or schema bug behind repeated
    /// (costly) calls.
    pub fn validate_shape(&self) -> std::result::Result<(), String> {
        if self.prayers.len() != EXPECTED_PRAYER_COUNT {
            return Err(format!(
                "expected {} prayers, got {}",
                EXPECTED_PRAYER_COUNT,
                self.prayers.len()
            ));
        }
        for (i, prayer) in self.prayers.iter().enumerate() {
            if prayer.title.trim().is_empty() {
                return Err(format!("prayer {} has a blank title", i));
            }
            if prayer.body.trim().is_empty() {
                return Err(format!("prayer {} has a blank body", i));
            }
        }
        Ok(())
    }
}

// == Generate Error ==
/// Failure classification for a single generation attempt.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Network/transport failure - retryable
    #[error("transport failure: {0}")]
    Transport(String),

    /// Response arrived but could not be interpreted - terminal
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

// == Prayer Generator Trait ==
/// The one external collaborator capability the core consumes: an opaque,
/// potentially slow, potentially failing generation call.
#[async_trait]
pub trait PrayerGenerator: Send + Sync {
    /// Generates prayers for a (tradition, situation) pair.
    async fn generate(
        &self,
        tradition: &str,
        situation: &str,
    ) -> std::result::Result<GenerationResult, GenerateError>;
}
