//! Infrastructure layer for the signal trend runner
//!
//! Input handling and log text; nothing here knows how trends are computed.

pub mod log_messages;
pub mod row_source;

pub use row_source::{load_rows, read_rows};
