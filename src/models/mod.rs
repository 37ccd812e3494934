//! Models Module
//!
//! Request and response DTOs for the HTTP surface.

mod requests;
mod responses;

pub use requests::PrayerRequest;
pub use responses::{ClearResponse, HealthResponse, PrayerResponse, StatsResponse};
