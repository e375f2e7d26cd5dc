//! Single-pass trend extraction over a series window
//!
//! The scan keeps four things while walking the rows once in whatever order
//! they arrive: the value at the current date, the value at the basis date,
//! and the minimum and maximum observations. Date matches overwrite (last row
//! wins); extremes only move on a strictly smaller/larger value (first row
//! wins on ties).

use crate::domain::{
    trend::{classifier::classify, observation::Observation, result::TrendResult},
    types::{SeriesKey, TimeKey},
};

/// Running state of the scan
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TrendScan {
    value: Option<f64>,
    basis_value: Option<f64>,
    min: Option<Observation>,
    max: Option<Observation>,
}

impl TrendScan {
    fn observe(mut self, current_time: TimeKey, basis_time: TimeKey, row: Observation) -> Self {
        if row.time == current_time {
            self.value = Some(row.value);
        }
        if row.time == basis_time {
            self.basis_value = Some(row.value);
        }
        if self.min.is_none_or(|min| row.value < min.value) {
            self.min = Some(row);
        }
        if self.max.is_none_or(|max| row.value > max.value) {
            self.max = Some(row);
        }
        self
    }
}

/// Compute the trend of one series at `current_time` against `basis_time`
///
/// `rows` is consumed exactly once. Nothing fails: when there is no row at
/// `current_time` (or no rows at all) the result keeps whatever was observed
/// but every trend stays `Unknown`.
pub fn compute_trend<I>(
    series: SeriesKey,
    current_time: TimeKey,
    basis_time: TimeKey,
    rows: I,
) -> TrendResult
where
    I: IntoIterator,
    I::Item: Into<Observation>,
{
    let scan = rows
        .into_iter()
        .map(Into::<Observation>::into)
        .fold(TrendScan::default(), |scan, row| {
            scan.observe(current_time, basis_time, row)
        });

    let mut result = TrendResult::empty(series, basis_time);
    result.value = scan.value;
    result.basis_value = scan.basis_value;
    result.min_date = scan.min.map(|min| min.time);
    result.min_value = scan.min.map(|min| min.value);
    result.max_date = scan.max.map(|max| max.time);
    result.max_value = scan.max.map(|max| max.value);

    let (Some(value), Some(min)) = (scan.value, scan.min) else {
        return result;
    };

    if let Some(basis_value) = scan.basis_value {
        result.basis_trend = classify(value, basis_value, min.value);
    }
    result.min_trend = classify(value, min.value, min.value);
    if let Some(max) = scan.max {
        result.max_trend = classify(value, max.value, min.value);
    }

    result
}
