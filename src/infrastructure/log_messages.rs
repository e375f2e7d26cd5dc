//! Log message constants for the trend runner
//!
//! Messages are logged as `"{}"` arguments next to structured fields, so
//! none of them carry format placeholders of their own.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting signal trend run";
    pub const FINISHED: &str = "Signal trend run finished";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded";
    pub const DATE_FROM_INPUT: &str = "No trend date configured, using latest input date";
}

/// Row input messages
pub mod input {
    pub const READING_FILE: &str = "Reading signal rows from file";
    pub const READING_STDIN: &str = "Reading signal rows from stdin";
    pub const ROWS_LOADED: &str = "Signal rows loaded";
    pub const NO_ROWS: &str = "Input contained no signal rows";
}

/// Trend computation messages
pub mod trend {
    pub const WINDOW_RESOLVED: &str = "Trend window resolved";
    pub const ROWS_OUTSIDE_WINDOW: &str = "Dropped rows outside the trend window";
    pub const SERIES_COMPUTED: &str = "Series trend computed";
    pub const SERIES_UNCLASSIFIED: &str = "Series has no value at the current date";
    pub const TRENDS_COMPUTED: &str = "Trends computed";
}
