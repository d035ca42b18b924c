//! Budget HTTP adapter module.
//!
//! Provides REST API endpoints for distribution and disaster adjustment.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::budget_routes;
