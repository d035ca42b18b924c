//! Budget Allocation - Sector budget distribution and citizen feedback service
//!
//! This crate splits a national budget across weighted sectors, reallocates
//! relief funding after a disaster, and aggregates citizen feedback into
//! ranked clusters with sentiment and keyword analysis.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
