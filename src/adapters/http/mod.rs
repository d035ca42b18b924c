//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure; they
//! share one [`AppState`] and one [`ApiError`] mapping.

pub mod budget;
pub mod dashboard;
pub mod error;
pub mod feedback;
mod middleware;
mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::with_service_layers;
pub use router::{api_router, health};
pub use state::AppState;
