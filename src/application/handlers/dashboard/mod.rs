//! Dashboard query handlers.
//!
//! Read-only handlers that render the current distribution for each view.

mod get_dashboard;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
