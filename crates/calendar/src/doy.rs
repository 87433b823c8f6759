//! Day-of-year numbering for Gregorian dates.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::gregorian::{days_in_year, is_leap_year};

/// Day-of-year on which each month starts in a common year
/// (index 0 unused, index 1 = January starts at DOY 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Day-of-year on which each month starts in a leap year.
pub(crate) const LEAP_MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

/// How day-of-year values are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoyConvention {
    /// Days are counted as they occur: 1..=365 in common years and
    /// 1..=366 in leap years.
    #[default]
    Calendar,
    /// Every year is numbered on the leap-year grid. 1 March is always
    /// day 61, so day 60 is skipped in common years.
    Fixed366,
}

/// Returns the 1-based ordinal day of `date` within its year.
pub fn day_of_year(date: CalendarDate) -> u16 {
    day_of_year_with(date, DoyConvention::Calendar)
}

/// Returns the ordinal day of `date` under the given numbering convention.
pub fn day_of_year_with(date: CalendarDate, convention: DoyConvention) -> u16 {
    let month = date.month() as usize;
    let offset = u16::from(date.day()) - 1;
    let leap_grid = match convention {
        DoyConvention::Calendar => is_leap_year(date.year()),
        DoyConvention::Fixed366 => true,
    };
    if leap_grid {
        LEAP_MONTH_START_DOY[month] + offset
    } else {
        MONTH_START_DOY[month] + offset
    }
}

/// Returns the `(month, day)` pair for a calendar day-of-year in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDoy`] if `doy` is 0 or larger than the
/// number of days in `year`.
pub fn month_day_from_doy(year: i32, doy: u16) -> Result<(u8, u8), CalendarError> {
    let max_doy = days_in_year(year);
    if !(1..=max_doy).contains(&doy) {
        return Err(CalendarError::InvalidDoy { doy, year, max_doy });
    }
    let starts = if is_leap_year(year) {
        &LEAP_MONTH_START_DOY
    } else {
        &MONTH_START_DOY
    };
    let month = (1..=12u8)
        .rev()
        .find(|&m| starts[m as usize] <= doy)
        .unwrap_or(1);
    let day = doy - starts[month as usize] + 1;
    Ok((month, day as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn calendar_doy_common_year() {
        assert_eq!(day_of_year(date(1999, 1, 1)), 1);
        assert_eq!(day_of_year(date(1999, 2, 28)), 59);
        assert_eq!(day_of_year(date(1999, 3, 1)), 60);
        assert_eq!(day_of_year(date(1999, 12, 31)), 365);
    }

    #[test]
    fn calendar_doy_leap_year() {
        assert_eq!(day_of_year(date(2000, 2, 29)), 60);
        assert_eq!(day_of_year(date(2000, 3, 1)), 61);
        assert_eq!(day_of_year(date(2000, 12, 31)), 366);
    }

    #[test]
    fn fixed366_skips_day_60_in_common_years() {
        let conv = DoyConvention::Fixed366;
        assert_eq!(day_of_year_with(date(1999, 2, 28), conv), 59);
        assert_eq!(day_of_year_with(date(1999, 3, 1), conv), 61);
        assert_eq!(day_of_year_with(date(1999, 12, 31), conv), 366);
        assert_eq!(day_of_year_with(date(2000, 3, 1), conv), 61);
    }

    #[test]
    fn month_day_roundtrip_all_days() {
        for year in [1999, 2000] {
            for doy in 1..=days_in_year(year) {
                let (m, d) = month_day_from_doy(year, doy).unwrap();
                assert_eq!(
                    day_of_year(date(year, m, d)),
                    doy,
                    "roundtrip failed for {year} doy {doy}: ({m}, {d})"
                );
            }
        }
    }

    #[test]
    fn month_day_invalid() {
        assert_eq!(
            month_day_from_doy(1999, 366).unwrap_err(),
            CalendarError::InvalidDoy {
                doy: 366,
                year: 1999,
                max_doy: 365,
            }
        );
        assert!(month_day_from_doy(2000, 0).is_err());
        assert_eq!(month_day_from_doy(2000, 366).unwrap(), (12, 31));
    }

    #[test]
    fn table_integrity() {
        use crate::gregorian::month_length;
        for m in 1..12u8 {
            let i = m as usize;
            assert_eq!(
                MONTH_START_DOY[i] + u16::from(month_length(1999, m)),
                MONTH_START_DOY[i + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
            assert_eq!(
                LEAP_MONTH_START_DOY[i] + u16::from(month_length(2000, m)),
                LEAP_MONTH_START_DOY[i + 1],
                "LEAP_MONTH_START_DOY mismatch at month {m}"
            );
        }
    }
}
