//! Application services and orchestration
//!
//! This module wires configuration, row input and the trend service into a
//! single run.

pub mod app;
pub mod trend_service;

pub use app::Application;
pub use trend_service::{TrendQuery, TrendService};
