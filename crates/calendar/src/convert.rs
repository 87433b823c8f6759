//! Day-count conversions: epoch milliseconds, Julian dates and fractional
//! days relative to a reference date.
//!
//! Epoch-day arithmetic uses the era-based civil algorithms (400-year eras of
//! 146 097 days), so no lookup tables are needed. Over the supported year
//! range every millisecond count fits in an `i64`.

use crate::date::{CalendarDate, MILLIS_PER_DAY};
use crate::error::CalendarError;

/// Julian date of the Unix epoch, 1970-01-01T00:00.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Default reference date for [`days_since`] and [`date_from_days`],
/// 1900-01-01T00:00.
pub const DEFAULT_REFERENCE: CalendarDate = match CalendarDate::new_const(1900, 1, 1) {
    Some(date) => date,
    None => panic!("1900-01-01 is a valid date"),
};

const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Returns milliseconds since 1970-01-01T00:00 (negative before the epoch).
pub fn epoch_millis(date: CalendarDate) -> i64 {
    days_from_civil(date.year(), date.month(), date.day()) * i64::from(MILLIS_PER_DAY)
        + i64::from(date.millis_of_day())
}

/// Builds a date from milliseconds since 1970-01-01T00:00.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the resulting year does not fit
/// in an `i32`, or [`CalendarError::InvalidYear`] if it lies outside the
/// supported range.
pub fn from_epoch_millis(millis: i64) -> Result<CalendarDate, CalendarError> {
    let day_ms = i64::from(MILLIS_PER_DAY);
    let days = millis.div_euclid(day_ms);
    let time = millis.rem_euclid(day_ms) as u32;
    let (year, month, day) = civil_from_days(days);
    let year = i32::try_from(year).map_err(|_| CalendarError::OutOfRange {
        reason: format!("year {year} does not fit in i32"),
    })?;
    CalendarDate::new(year, month, day)?.with_millis_of_day(time)
}

/// Returns the Julian date of `date`, including the fractional time-of-day.
///
/// 1970-01-01T00:00 maps to 2440587.5 and 2000-01-01T12:00 to 2451545.0.
pub fn julian_day(date: CalendarDate) -> f64 {
    epoch_millis(date) as f64 / f64::from(MILLIS_PER_DAY) + UNIX_EPOCH_JD
}

/// Returns the (fractional) number of days from `reference` to `date`.
///
/// Negative when `date` precedes `reference`.
pub fn days_since(date: CalendarDate, reference: CalendarDate) -> f64 {
    (epoch_millis(date) - epoch_millis(reference)) as f64 / f64::from(MILLIS_PER_DAY)
}

/// Converts a fractional day count relative to `reference` back into a date,
/// rounded to the nearest millisecond.
///
/// The day count is first taken to whole microseconds (truncating), then
/// shifted by half a millisecond and floored to milliseconds.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if `days` is not finite or the
/// result leaves the representable range.
pub fn date_from_days(days: f64, reference: CalendarDate) -> Result<CalendarDate, CalendarError> {
    let micros = days * 86_400.0 * 1e6;
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 / 2.0 {
        return Err(CalendarError::OutOfRange {
            reason: format!("{days} days cannot be represented"),
        });
    }
    let offset_ms = (micros as i64 + 500).div_euclid(1000);
    let millis = epoch_millis(reference)
        .checked_add(offset_ms)
        .ok_or_else(|| CalendarError::OutOfRange {
            reason: format!("{days} days after {reference} overflows"),
        })?;
    from_epoch_millis(millis)
}
