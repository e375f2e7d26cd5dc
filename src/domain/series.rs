//! Rows of a multi-series signal table

use crate::domain::{
    trend::Observation,
    types::{SeriesKey, TimeKey},
};
use serde::{Deserialize, Serialize};

/// One row as delivered by the signal store
///
/// Identity fields arrive as raw strings and are carried into the series key
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    pub geo_type: String,
    pub geo_value: String,
    pub source: String,
    pub signal: String,
    pub time_value: TimeKey,
    pub value: f64,
}

impl SignalRow {
    /// Identity of the series this row belongs to
    pub fn series_key(&self) -> SeriesKey {
        SeriesKey::from_raw(
            self.geo_type.as_str(),
            self.geo_value.as_str(),
            self.source.as_str(),
            self.signal.as_str(),
        )
    }

    pub fn observation(&self) -> Observation {
        Observation::new(self.time_value, self.value)
    }
}
