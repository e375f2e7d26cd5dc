//! Trend result record

use crate::domain::{
    trend::{category::TrendCategory, observation::Observation},
    types::{GeoType, GeoValue, SeriesKey, SignalName, SignalSource, TimeKey},
};
use serde::{Deserialize, Serialize};

/// Trend of one series at one date
///
/// An immutable snapshot: every field is an owned copy, nothing points back
/// into the rows it was computed from. Serializes field-by-field with absent
/// values as `null` and categories as their lowercase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub(super) geo_type: GeoType,
    pub(super) geo_value: GeoValue,
    pub(super) signal_source: SignalSource,
    #[serde(rename = "signal_signal")]
    pub(super) signal_name: SignalName,

    pub(super) value: Option<f64>,

    pub(super) basis_date: TimeKey,
    pub(super) basis_value: Option<f64>,
    pub(super) basis_trend: TrendCategory,

    pub(super) min_date: Option<TimeKey>,
    pub(super) min_value: Option<f64>,
    pub(super) min_trend: TrendCategory,

    pub(super) max_date: Option<TimeKey>,
    pub(super) max_value: Option<f64>,
    pub(super) max_trend: TrendCategory,
}

impl TrendResult {
    /// Result carrying only identity and the requested basis date
    pub(super) fn empty(series: SeriesKey, basis_date: TimeKey) -> Self {
        Self {
            geo_type: series.geo_type,
            geo_value: series.geo_value,
            signal_source: series.signal_source,
            signal_name: series.signal_name,
            value: None,
            basis_date,
            basis_value: None,
            basis_trend: TrendCategory::Unknown,
            min_date: None,
            min_value: None,
            min_trend: TrendCategory::Unknown,
            max_date: None,
            max_value: None,
            max_trend: TrendCategory::Unknown,
        }
    }

    pub fn series_key(&self) -> SeriesKey {
        SeriesKey::new(
            self.geo_type.clone(),
            self.geo_value.clone(),
            self.signal_source.clone(),
            self.signal_name.clone(),
        )
    }

    pub fn geo_type(&self) -> &GeoType {
        &self.geo_type
    }

    pub fn geo_value(&self) -> &GeoValue {
        &self.geo_value
    }

    pub fn signal_source(&self) -> &SignalSource {
        &self.signal_source
    }

    pub fn signal_name(&self) -> &SignalName {
        &self.signal_name
    }

    /// Observed value at the current date
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn basis_date(&self) -> TimeKey {
        self.basis_date
    }

    pub fn basis_value(&self) -> Option<f64> {
        self.basis_value
    }

    pub fn basis_trend(&self) -> TrendCategory {
        self.basis_trend
    }

    pub fn min_date(&self) -> Option<TimeKey> {
        self.min_date
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    pub fn min_trend(&self) -> TrendCategory {
        self.min_trend
    }

    pub fn max_date(&self) -> Option<TimeKey> {
        self.max_date
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    pub fn max_trend(&self) -> TrendCategory {
        self.max_trend
    }

    /// Smallest observation in the window, first occurrence on ties
    pub fn min(&self) -> Option<Observation> {
        Some(Observation::new(self.min_date?, self.min_value?))
    }

    /// Largest observation in the window, first occurrence on ties
    pub fn max(&self) -> Option<Observation> {
        Some(Observation::new(self.max_date?, self.max_value?))
    }

    /// Whether any of the three trends was classified
    pub fn is_classified(&self) -> bool {
        [self.basis_trend, self.min_trend, self.max_trend]
            .iter()
            .any(TrendCategory::is_known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> SeriesKey {
        SeriesKey::from_raw("county", "42003", "jhu-csse", "confirmed_incidence_num")
    }

    #[test]
    fn test_empty_result_serialization_shape() {
        let result = TrendResult::empty(series(), TimeKey::new(20200401));

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "geo_type": "county",
                "geo_value": "42003",
                "signal_source": "jhu-csse",
                "signal_signal": "confirmed_incidence_num",
                "value": null,
                "basis_date": 20200401,
                "basis_value": null,
                "basis_trend": "unknown",
                "min_date": null,
                "min_value": null,
                "min_trend": "unknown",
                "max_date": null,
                "max_value": null,
                "max_trend": "unknown",
            })
        );
    }

    #[test]
    fn test_series_key_round_trips_identity() {
        let result = TrendResult::empty(series(), TimeKey::new(20200401));
        assert_eq!(result.series_key(), series());
        assert!(!result.is_classified());
        assert_eq!(result.min(), None);
    }
}
