//! A single dated measurement of a signal

use crate::domain::types::TimeKey;
use derive_more::From;
use serde::{Deserialize, Serialize};

/// One `(time, value)` point of a series
#[derive(Debug, Clone, Copy, PartialEq, From, Serialize, Deserialize)]
pub struct Observation {
    pub time: TimeKey,
    pub value: f64,
}

impl Observation {
    pub fn new(time: TimeKey, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(i64, f64)> for Observation {
    fn from((time, value): (i64, f64)) -> Self {
        Self::new(TimeKey::new(time), value)
    }
}
