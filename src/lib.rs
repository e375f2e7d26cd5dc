//! Signal Trend - directional trend classification for signal series
//!
//! Classifies the current value of a (geography, signal) series as
//! increasing, decreasing or steady against a basis date and the window
//! minimum and maximum.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use domain::{classify, compute_trend, TrendCategory, TrendResult};
pub use error::{Error, Result};
