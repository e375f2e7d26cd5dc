//! Constants for trend classification

/// Relative change (as a fraction) at which a series stops being steady
pub const CHANGE_THRESHOLD: f64 = 0.1;

/// Ratio of normalized current to normalized reference at or above which a
/// series is increasing (`1 + CHANGE_THRESHOLD`)
pub const INCREASING_RATIO: f64 = 1.1;

/// Ratio at or below which a series is decreasing (`1 - CHANGE_THRESHOLD`)
pub const DECREASING_RATIO: f64 = 0.9;
