//! Trend classification of a signal series
//!
//! A series is classified at a current date against three reference points
//! drawn from the same window: a caller-chosen basis date, the window minimum
//! and the window maximum.

pub mod category;
pub mod classifier;
pub mod constants;
pub mod extractor;
pub mod observation;
pub mod result;

// Re-export commonly used types
pub use category::{ParseTrendCategoryError, TrendCategory};
pub use classifier::classify;
pub use extractor::compute_trend;
pub use observation::Observation;
pub use result::TrendResult;
