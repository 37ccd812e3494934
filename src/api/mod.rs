//! API Module
//!
//! HTTP surface for the prayer gateway.

mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::create_router;
