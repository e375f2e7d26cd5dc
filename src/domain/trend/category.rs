//! Trend categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a series relative to one reference point
///
/// `Unknown` means no classification was made, either because the reference
/// point was missing or because there was no current observation to anchor
/// the comparison. It is never the outcome of a classification itself.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TrendCategory {
    #[default]
    Unknown,
    Increasing,
    Decreasing,
    Steady,
}

impl TrendCategory {
    /// All categories, `Unknown` first
    pub const ALL: [Self; 4] = [
        Self::Unknown,
        Self::Increasing,
        Self::Decreasing,
        Self::Steady,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Steady => "steady",
        }
    }

    /// Whether a classification was actually made
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TrendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown trend category: '{0}'")]
pub struct ParseTrendCategoryError(pub String);

impl FromStr for TrendCategory {
    type Err = ParseTrendCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseTrendCategoryError(s.to_string()))
    }
}
