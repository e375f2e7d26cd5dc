//! Calendar interpretation of `YYYYMMDD` date keys
//!
//! Signal rows index days as eight-digit integers. The trend core never looks
//! inside a key; windowing and basis selection do, and they go through here.

use crate::domain::types::TimeKey;
use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

/// Errors converting between date keys and calendar days
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeKeyError {
    #[error("Invalid date key: {0} is not a calendar day")]
    NotACalendarDay(i64),

    #[error("Invalid date string: '{0}' (expected YYYYMMDD or YYYY-MM-DD)")]
    Unparseable(String),

    #[error("Date key {key} cannot be shifted by {days} days")]
    OutOfRange { key: i64, days: i64 },
}

impl TimeKey {
    /// Build a key from a calendar day
    pub fn from_date(date: NaiveDate) -> Self {
        let key = i64::from(date.year()) * 10_000
            + i64::from(date.month()) * 100
            + i64::from(date.day());
        Self::new(key)
    }

    /// Interpret this key as a `YYYYMMDD` calendar day
    pub fn to_date(self) -> Result<NaiveDate, TimeKeyError> {
        let key = self.into_inner();
        let invalid = |_| TimeKeyError::NotACalendarDay(key);
        let year = i32::try_from(key / 10_000).map_err(invalid)?;
        let month = u32::try_from((key / 100) % 100).map_err(invalid)?;
        let day = u32::try_from(key % 100).map_err(invalid)?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeKeyError::NotACalendarDay(key))
    }

    /// Move this key by a number of calendar days (negative moves backwards)
    pub fn shift_days(self, days: i64) -> Result<Self, TimeKeyError> {
        let key = self.into_inner();
        let out_of_range = || TimeKeyError::OutOfRange { key, days };
        let date = self.to_date()?;
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days < 0 {
            date.checked_sub_days(magnitude)
        } else {
            date.checked_add_days(magnitude)
        };
        shifted.map(Self::from_date).ok_or_else(out_of_range)
    }

    /// Render as `YYYY-MM-DD`
    pub fn date_string(self) -> Result<String, TimeKeyError> {
        Ok(self.to_date()?.format("%Y-%m-%d").to_string())
    }
}

/// Parse `YYYYMMDD` or `YYYY-MM-DD` into a key
///
/// Only real calendar days are accepted.
pub fn parse_time_key(input: &str) -> Result<TimeKey, TimeKeyError> {
    let trimmed = input.trim();
    let format = if trimmed.contains('-') {
        "%Y-%m-%d"
    } else if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        "%Y%m%d"
    } else {
        return Err(TimeKeyError::Unparseable(input.to_string()));
    };

    NaiveDate::parse_from_str(trimmed, format)
        .map(TimeKey::from_date)
        .map_err(|_| TimeKeyError::Unparseable(input.to_string()))
}
