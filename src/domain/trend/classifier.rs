//! Pairwise trend classification
//!
//! Both compared values are first shifted by the window minimum (the floor) so
//! the relative change is measured on a common non-negative scale. The floor
//! is always the minimum of the whole window, never the smaller of the pair.

use crate::domain::trend::{
    category::TrendCategory,
    constants::{DECREASING_RATIO, INCREASING_RATIO},
};

/// Classify `current` against `reference`, both normalized by `floor`
///
/// Returns `Steady` when the normalized values are equal and `Increasing`
/// when only the reference sits on the floor. Otherwise the ratio of
/// normalized current to normalized reference is thresholded at +/-10%,
/// inclusive on both sides. Never returns `Unknown`.
pub fn classify(current: f64, reference: f64, floor: f64) -> TrendCategory {
    let normalized_reference = reference - floor;
    let normalized_current = current - floor;

    if normalized_current == normalized_reference {
        return TrendCategory::Steady;
    }
    if normalized_reference == 0.0 {
        return TrendCategory::Increasing;
    }

    let ratio = normalized_current / normalized_reference;
    if ratio >= INCREASING_RATIO {
        TrendCategory::Increasing
    } else if ratio <= DECREASING_RATIO {
        TrendCategory::Decreasing
    } else {
        TrendCategory::Steady
    }
}
