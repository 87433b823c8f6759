//! Dekad placement rules for single dates.

use dekadal_calendar::CalendarDate;

use crate::dekad::Dekad;
use crate::error::DekadError;

/// Returns the end date of the dekad containing `date`.
///
/// The end date is day 10, day 20 or the last day of the same month, at
/// midnight. The result never leaves the input's month.
///
/// # Example
///
/// ```
/// use dekadal_calendar::CalendarDate;
/// use dekadal_dekad::check_dekad;
///
/// let date = CalendarDate::new(2000, 2, 28).unwrap();
/// assert_eq!(check_dekad(date), CalendarDate::new(2000, 2, 29).unwrap());
/// ```
pub fn check_dekad(date: CalendarDate) -> CalendarDate {
    Dekad::from_date(date).end_date()
}

/// Returns the last day of month of dekad `dekad` (1..=3) in `month` of `year`:
/// 10, 20 or the month length.
///
/// # Errors
///
/// Returns [`DekadError::InvalidDekadNumber`] if `dekad` is not in 1..=3, or
/// [`DekadError::Calendar`] if `month` is not in 1..=12.
pub fn dekad_to_day(year: i32, month: u8, dekad: u8) -> Result<u8, DekadError> {
    Ok(Dekad::new(year, month, dekad)?.end_day())
}

/// Returns the dekad number (1..=3) for a day of month.
///
/// Month length is not checked: any day past 20 maps to 3, and day 0 maps to 1.
pub fn day_to_dekad(day: u8) -> u8 {
    match day {
        0..=10 => 1,
        11..=20 => 2,
        _ => 3,
    }
}

/// Returns `true` if `date` is the first day of a dekad (day 1, 11 or 21).
pub fn check_dekad_startdate(date: CalendarDate) -> bool {
    matches!(date.day(), 1 | 11 | 21)
}

/// Returns `true` if `date` is the last day of a dekad (day 10, 20 or the
/// last day of its month).
pub fn check_dekad_enddate(date: CalendarDate) -> bool {
    let day = date.day();
    day == 10 || day == 20 || day == date.days_in_month()
}

/// Returns the start date (day 1, 11 or 21, at midnight) of the dekad
/// containing `date`.
pub fn dekad_startdate_from_date(date: CalendarDate) -> CalendarDate {
    Dekad::from_date(date).start_date()
}
