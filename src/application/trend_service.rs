//! Windowing and per-series trend computation
//!
//! The service plays the caller the trend core expects: it narrows a table of
//! rows to the trend window, splits it into series, and runs the extractor
//! once per series.

use crate::config::TrendSettings;
use crate::domain::{
    compute_trend, parse_time_key, Observation, SeriesKey, SignalRow, TimeKey, TrendResult,
};
use crate::infrastructure::log_messages;
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Dates a trend run is evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendQuery {
    date: TimeKey,
    window_start: TimeKey,
    basis_date: TimeKey,
}

impl TrendQuery {
    /// Query at `date` over `[date - window_days, date]` with the basis
    /// `basis_shift_days` before `date`
    pub fn new(date: TimeKey, window_days: i64, basis_shift_days: i64) -> Result<Self> {
        if window_days < 0 {
            return Err(Error::invalid_query(format!(
                "window_days must not be negative (got {window_days})"
            )));
        }
        if basis_shift_days < 0 {
            return Err(Error::invalid_query(format!(
                "basis_shift_days must not be negative (got {basis_shift_days})"
            )));
        }

        Ok(Self {
            date,
            window_start: date.shift_days(-window_days)?,
            basis_date: date.shift_days(-basis_shift_days)?,
        })
    }

    /// Resolve the query from settings, falling back to the latest row date
    ///
    /// Returns `None` when no date is configured and there are no rows to
    /// take one from.
    pub fn resolve(settings: &TrendSettings, rows: &[SignalRow]) -> Result<Option<Self>> {
        let date = match settings.date.as_deref() {
            Some(date) => Some(parse_time_key(date)?),
            None => {
                let latest = rows.iter().map(|row| row.time_value).max();
                if let Some(latest) = latest {
                    info!(date = %latest, "{}", log_messages::configuration::DATE_FROM_INPUT);
                }
                latest
            }
        };

        date.map(|date| Self::new(date, settings.window_days, settings.basis_shift_days))
            .transpose()
    }

    pub fn date(&self) -> TimeKey {
        self.date
    }

    pub fn window_start(&self) -> TimeKey {
        self.window_start
    }

    pub fn basis_date(&self) -> TimeKey {
        self.basis_date
    }

    /// Whether `time` falls inside the trend window (both ends inclusive)
    pub fn contains(&self, time: TimeKey) -> bool {
        (self.window_start..=self.date).contains(&time)
    }
}

/// Computes one trend per series present in the window
#[derive(Debug, Clone)]
pub struct TrendService {
    query: TrendQuery,
}

impl TrendService {
    pub fn new(query: TrendQuery) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &TrendQuery {
        &self.query
    }

    /// Group windowed rows by series and classify each
    ///
    /// Results are ordered by series key. A series with rows in the window but
    /// none at the query date still gets an (unclassified) result; a series
    /// with no rows in the window gets none.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn compute(&self, rows: &[SignalRow]) -> Vec<TrendResult> {
        info!(
            date = %self.query.date,
            window_start = %self.query.window_start,
            basis_date = %self.query.basis_date,
            "{}",
            log_messages::trend::WINDOW_RESOLVED
        );

        let mut series: BTreeMap<SeriesKey, Vec<Observation>> = BTreeMap::new();
        let mut dropped = 0usize;
        for row in rows {
            if self.query.contains(row.time_value) {
                series.entry(row.series_key()).or_default().push(row.observation());
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, "{}", log_messages::trend::ROWS_OUTSIDE_WINDOW);
        }

        let results: Vec<TrendResult> = series
            .into_iter()
            .map(|(key, observations)| self.compute_series(key, observations))
            .collect();

        info!(
            series = results.len(),
            "{}",
            log_messages::trend::TRENDS_COMPUTED
        );
        results
    }

    fn compute_series(&self, key: SeriesKey, observations: Vec<Observation>) -> TrendResult {
        let label = key.to_string();
        let result = compute_trend(key, self.query.date, self.query.basis_date, observations);

        if result.value().is_some() {
            debug!(
                series = %label,
                basis_trend = %result.basis_trend(),
                min_trend = %result.min_trend(),
                max_trend = %result.max_trend(),
                "{}",
                log_messages::trend::SERIES_COMPUTED
            );
        } else {
            debug!(series = %label, "{}", log_messages::trend::SERIES_UNCLASSIFIED);
        }
        result
    }
}
