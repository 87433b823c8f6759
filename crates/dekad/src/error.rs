//! Error types for the dekadal-dekad crate.

use dekadal_calendar::{CalendarDate, CalendarError};

/// Error type for all fallible operations in the dekadal-dekad crate.
///
/// Every variant describes an invalid argument; dekad arithmetic has no
/// transient failure modes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DekadError {
    /// Returned when a dekad number is outside 1..=3.
    #[error("invalid dekad number: {dekad} (must be 1..=3)")]
    InvalidDekadNumber {
        /// The invalid dekad number that was provided.
        dekad: u8,
    },

    /// Returned when a running dekad number is zero or negative.
    #[error("invalid running dekad number: {running} (must be >= 1)")]
    InvalidRunningDekad {
        /// The invalid running dekad number that was provided.
        running: i32,
    },

    /// Returned when a date lies before the base year of a running count.
    #[error("{date} precedes base year {base_year}")]
    BeforeBaseYear {
        /// The date that was provided.
        date: CalendarDate,
        /// The base year of the running count.
        base_year: i32,
    },

    /// Returned when a running count does not fit the integer range.
    #[error("running dekad out of range: {reason}")]
    Overflow {
        /// Description of the overflowing computation.
        reason: String,
    },

    /// Wraps an error originating from the dekadal-calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
