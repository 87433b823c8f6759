//! Decomposition of dates into calendar fields.

use crate::date::CalendarDate;
use crate::doy::{DoyConvention, day_of_year_with};

/// A date broken into its calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    /// Year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u8,
    /// Day of month (1..=31).
    pub day: u8,
    /// Hour (0..=23).
    pub hour: u8,
    /// Minute (0..=59).
    pub minute: u8,
    /// Second (0..=59).
    pub second: u8,
    /// Millisecond (0..=999).
    pub millisecond: u16,
    /// Day of year, numbered per the requested [`DoyConvention`].
    pub doy: u16,
}

/// Splits `date` into year, month, day, hour, minute, second, millisecond
/// and day-of-year.
pub fn calendar_fields(date: CalendarDate, convention: DoyConvention) -> CalendarFields {
    CalendarFields {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        hour: date.hour(),
        minute: date.minute(),
        second: date.second(),
        millisecond: date.millisecond(),
        doy: day_of_year_with(date, convention),
    }
}

impl From<CalendarDate> for CalendarFields {
    fn from(date: CalendarDate) -> Self {
        calendar_fields(date, DoyConvention::Calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields() {
        let date = CalendarDate::new(2001, 3, 1)
            .unwrap()
            .with_time(4, 5, 6, 789)
            .unwrap();
        let fields = CalendarFields::from(date);
        assert_eq!(
            fields,
            CalendarFields {
                year: 2001,
                month: 3,
                day: 1,
                hour: 4,
                minute: 5,
                second: 6,
                millisecond: 789,
                doy: 60,
            }
        );
    }

    #[test]
    fn fixed366_doy() {
        let date = CalendarDate::new(2001, 3, 1).unwrap();
        assert_eq!(calendar_fields(date, DoyConvention::Fixed366).doy, 61);
        let date = CalendarDate::new(2001, 2, 28).unwrap();
        assert_eq!(calendar_fields(date, DoyConvention::Fixed366).doy, 59);
    }
}
