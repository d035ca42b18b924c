//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, rounding, errors)
//! - `budget` - Sector distribution and disaster relief adjustment
//! - `feedback` - Feedback deduplication, ranking and keyword views
//! - `dashboard` - Government and public dashboard read models

pub mod budget;
pub mod dashboard;
pub mod feedback;
pub mod foundation;
