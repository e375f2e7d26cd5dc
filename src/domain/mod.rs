//! Domain types and trend logic for signal series
//!
//! Everything in here is synchronous and free of I/O.

pub mod series;
pub mod time_key;
pub mod trend;
pub mod types;

pub use series::SignalRow;
pub use time_key::{parse_time_key, TimeKeyError};
pub use trend::*;
pub use types::*;
