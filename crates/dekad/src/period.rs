//! Dekad periods within a year and running dekad numbers across years.

use dekadal_calendar::CalendarDate;

use crate::batch::map_dates;
use crate::dekad::Dekad;
use crate::error::DekadError;

/// Number of dekads in one year.
pub const DEKADS_PER_YEAR: i32 = 36;

/// Returns the position (1..=36) of the dekad containing `date` within its
/// year: `(month - 1) * 3 + dekad_number`. The year itself is ignored.
pub fn dekad_period(date: CalendarDate) -> u8 {
    Dekad::from_date(date).period()
}

/// Returns [`dekad_period`] for each date, in input order.
pub fn get_dekad_period(dates: &[CalendarDate]) -> Vec<u8> {
    map_dates(dates, dekad_period)
}

/// Returns the end date of the `running`-th dekad counted from the first
/// dekad of January of `year`.
///
/// Numbers 1..=36 fall within `year`; larger numbers roll into the
/// following years, so 37 is the first dekad of January of `year + 1`.
///
/// # Errors
///
/// Returns [`DekadError::InvalidRunningDekad`] if `running` is zero or
/// negative, or [`DekadError::Overflow`] if the target year does not fit
/// in an `i32`.
///
/// # Example
///
/// ```
/// use dekadal_calendar::CalendarDate;
/// use dekadal_dekad::running_dekad_to_date;
///
/// let date = running_dekad_to_date(2014, 35).unwrap();
/// assert_eq!(date, CalendarDate::new(2014, 12, 20).unwrap());
/// ```
pub fn running_dekad_to_date(year: i32, running: i32) -> Result<CalendarDate, DekadError> {
    if running < 1 {
        return Err(DekadError::InvalidRunningDekad { running });
    }
    let offset = running - 1;
    let target_year = year
        .checked_add(offset / DEKADS_PER_YEAR)
        .ok_or_else(|| DekadError::Overflow {
            reason: format!("dekad {running} counted from {year} passes the last year"),
        })?;
    let within = offset % DEKADS_PER_YEAR;
    let month = (within / 3 + 1) as u8;
    let number = (within % 3 + 1) as u8;
    Ok(Dekad::new(target_year, month, number)?.end_date())
}

/// Returns the running dekad number of `date` counted from the first dekad
/// of January of `base_year`. Inverse of [`running_dekad_to_date`].
///
/// # Errors
///
/// Returns [`DekadError::BeforeBaseYear`] if `date` precedes `base_year`, or
/// [`DekadError::Overflow`] if the count does not fit in an `i32`.
pub fn running_dekad(date: CalendarDate, base_year: i32) -> Result<i32, DekadError> {
    if date.year() < base_year {
        return Err(DekadError::BeforeBaseYear { date, base_year });
    }
    let years = i64::from(date.year()) - i64::from(base_year);
    let running = years * i64::from(DEKADS_PER_YEAR) + i64::from(dekad_period(date));
    i32::try_from(running).map_err(|_| DekadError::Overflow {
        reason: format!("{date} is {running} dekads after {base_year}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dekadal_calendar::CalendarError;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn periods_ignore_year() {
        let dates = [date(2000, 2, 1), date(2000, 2, 13), date(2000, 2, 28)];
        assert_eq!(get_dekad_period(&dates), vec![4, 5, 6]);
        assert_eq!(dekad_period(date(1999, 12, 31)), 36);
        assert_eq!(dekad_period(date(2024, 1, 1)), 1);
    }

    #[test]
    fn periods_empty_input() {
        assert!(get_dekad_period(&[]).is_empty());
    }

    #[test]
    fn running_within_year() {
        assert_eq!(running_dekad_to_date(2014, 35).unwrap(), date(2014, 12, 20));
        assert_eq!(running_dekad_to_date(2014, 1).unwrap(), date(2014, 1, 10));
        assert_eq!(running_dekad_to_date(2014, 36).unwrap(), date(2014, 12, 31));
        assert_eq!(running_dekad_to_date(2000, 6).unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn running_rolls_into_later_years() {
        assert_eq!(running_dekad_to_date(2014, 37).unwrap(), date(2015, 1, 10));
        assert_eq!(running_dekad_to_date(2014, 72).unwrap(), date(2015, 12, 31));
        assert_eq!(running_dekad_to_date(2014, 73).unwrap(), date(2016, 1, 10));
    }

    #[test]
    fn running_rejects_non_positive() {
        assert_eq!(
            running_dekad_to_date(2014, 0).unwrap_err(),
            DekadError::InvalidRunningDekad { running: 0 }
        );
        assert_eq!(
            running_dekad_to_date(2014, -3).unwrap_err(),
            DekadError::InvalidRunningDekad { running: -3 }
        );
    }

    #[test]
    fn running_overflow() {
        assert!(matches!(
            running_dekad_to_date(i32::MAX, 37),
            Err(DekadError::Overflow { .. })
        ));
    }

    #[test]
    fn running_past_last_supported_year() {
        let year = CalendarDate::MAX_YEAR;
        assert_eq!(running_dekad_to_date(year, 36).unwrap(), date(year, 12, 31));
        assert!(matches!(
            running_dekad_to_date(year, 37),
            Err(DekadError::Calendar(CalendarError::InvalidYear { .. }))
        ));
    }

    #[test]
    fn running_inverse() {
        for n in 1..=108 {
            let end = running_dekad_to_date(2000, n).unwrap();
            assert_eq!(running_dekad(end, 2000).unwrap(), n, "running {n}");
        }
    }

    #[test]
    fn running_before_base_year() {
        let d = date(1999, 12, 31);
        assert_eq!(
            running_dekad(d, 2000).unwrap_err(),
            DekadError::BeforeBaseYear {
                date: d,
                base_year: 2000,
            }
        );
    }
}
