//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

// == Limits ==
/// Maximum accepted tradition identifier length
const MAX_TRADITION_LENGTH: usize = 100;

/// Maximum accepted free-text situation length
const MAX_SITUATION_LENGTH: usize = 500;

/// Request body for prayer retrieval (POST /prayers)
#[derive(Debug, Clone, Deserialize)]
pub struct PrayerRequest {
    /// Tradition identifier (e.g. "Buddhism")
    pub tradition: String,
    /// Free-text description of the situation
    pub situation: String,
}

impl PrayerRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.tradition.trim().is_empty() {
            return Some("Tradition cannot be empty".to_string());
        }
        if self.tradition.len() > MAX_TRADITION_LENGTH {
            return Some(format!(
                "Tradition exceeds maximum length of {} characters",
                MAX_TRADITION_LENGTH
            ));
        }
        if self.situation.trim().is_empty() {
            return Some("Situation cannot be empty".to_string());
        }
        if self.situation.len() > MAX_SITUATION_LENGTH {
            return Some(format!(
                "Situation exceeds maximum length of {} characters",
                MAX_SITUATION_LENGTH
            ));
        }
        None
    }
}
