//! Leap years and month lengths in the proleptic Gregorian calendar.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Years divisible by 4 are leap years, except centuries, which are leap
/// years only when divisible by 400. Year 0 (1 BC) is a leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, month))
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Month length for a month already known to be in 1..=12.
pub(crate) const fn month_length(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn common_years() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(1999));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1999, 2).unwrap(), 28);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn thirty_and_thirty_one() {
        for m in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2001, m).unwrap(), 31, "month {m}");
        }
        for m in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2001, m).unwrap(), 30, "month {m}");
        }
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            days_in_month(2000, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2000, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn year_lengths_match_month_sums() {
        for year in [1900, 1999, 2000, 2023, 2024] {
            let total: u16 = (1..=12).map(|m| u16::from(month_length(year, m))).sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }
}
