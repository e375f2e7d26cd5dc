//! Identity and key types for signal series
//!
//! Newtypes for the strings that name a series and for the integer date keys
//! that index its observations, so the rest of the crate never passes bare
//! primitives across a boundary. Identity strings are opaque: they are kept
//! exactly as supplied and never trimmed, checked or rewritten.

use derive_more::Display;
use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Kind of geography a series is reported for (e.g. `county`, `state`)
#[nutype(
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display,
        From,
        Into
    )
)]
pub struct GeoType(String);

/// Specific geography within a geo type (e.g. a FIPS code or `pa`)
#[nutype(
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display,
        From,
        Into
    )
)]
pub struct GeoValue(String);

/// Data source that publishes the signal
#[nutype(
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display,
        From,
        Into
    )
)]
pub struct SignalSource(String);

/// Name of the signal within its source
#[nutype(
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display,
        From,
        Into
    )
)]
pub struct SignalName(String);

/// Opaque ordered date key
///
/// The trend core only compares keys for equality. Calendar meaning
/// (`YYYYMMDD`) is attached by [`crate::domain::time_key`].
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into
))]
pub struct TimeKey(i64);

/// Full identity of one (geography, signal) series
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{geo_type}:{geo_value} {signal_source}:{signal_name}")]
pub struct SeriesKey {
    pub geo_type: GeoType,
    pub geo_value: GeoValue,
    pub signal_source: SignalSource,
    pub signal_name: SignalName,
}

impl SeriesKey {
    pub fn new(
        geo_type: GeoType,
        geo_value: GeoValue,
        signal_source: SignalSource,
        signal_name: SignalName,
    ) -> Self {
        Self {
            geo_type,
            geo_value,
            signal_source,
            signal_name,
        }
    }

    /// Build a key from the four raw identity strings, unchanged
    pub fn from_raw(
        geo_type: impl Into<String>,
        geo_value: impl Into<String>,
        signal_source: impl Into<String>,
        signal_name: impl Into<String>,
    ) -> Self {
        Self::new(
            GeoType::new(geo_type.into()),
            GeoValue::new(geo_value.into()),
            SignalSource::new(signal_source.into()),
            SignalName::new(signal_name.into()),
        )
    }
}
