//! Daily date sequence generation.

use crate::date::CalendarDate;

/// Generates a contiguous sequence of Gregorian days.
///
/// Starting from `start`, produces `n_days` consecutive dates by repeatedly
/// advancing to the next day. Month ends, leap days and year boundaries are
/// handled by [`CalendarDate::next_day`]. The time-of-day of `start` is
/// carried through. The sequence ends early at the last supported day.
///
/// # Example
///
/// ```
/// use dekadal_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::new(2000, 2, 28).unwrap();
/// let dates = date_sequence(start, 3);
/// // Feb 28, Feb 29, Mar 1
/// assert_eq!(dates[2], CalendarDate::new(2000, 3, 1).unwrap());
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    std::iter::successors(Some(start), |date| date.next_day())
        .take(n_days)
        .collect()
}
