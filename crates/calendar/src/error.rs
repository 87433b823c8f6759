//! Error types for the dekadal-calendar crate.

/// Error type for all fallible operations in the dekadal-calendar crate.
///
/// This enum covers validation failures for month, day, time-of-day and
/// day-of-year values in the proleptic Gregorian calendar, plus parse and
/// range failures from the conversion helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range.
    #[error("invalid year: {year} (must be {min}..={max})")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// Earliest supported year.
        min: i32,
        /// Latest supported year.
        max: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides the length of February.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a time-of-day component is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        /// Hour component (must be 0..=23).
        hour: u8,
        /// Minute component (must be 0..=59).
        minute: u8,
        /// Second component (must be 0..=59).
        second: u8,
        /// Millisecond component (must be 0..=999).
        millisecond: u16,
    },

    /// Returned when a day-of-year value is outside the range valid for its year.
    #[error("invalid day of year: {doy} for year {year} (max {max_doy})")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// The year the value was interpreted in.
        year: i32,
        /// The number of days in that year.
        max_doy: u16,
    },

    /// Returned when a date string cannot be parsed.
    #[error("cannot parse date {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when a conversion leaves the representable date range.
    #[error("date out of range: {reason}")]
    OutOfRange {
        /// Description of the overflowing conversion.
        reason: String,
    },
}
