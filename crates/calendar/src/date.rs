//! Gregorian calendar date with millisecond time-of-day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::doy::month_day_from_doy;
use crate::error::CalendarError;
use crate::gregorian::{is_leap_year, month_length};

/// Milliseconds in one day.
pub(crate) const MILLIS_PER_DAY: u32 = 86_400_000;

/// A date in the proleptic Gregorian calendar with an optional time-of-day.
///
/// The time-of-day is stored at millisecond resolution and defaults to
/// midnight. Years are limited to [`CalendarDate::MIN_YEAR`]..=
/// [`CalendarDate::MAX_YEAR`], the range of `chrono::NaiveDate`. Values
/// order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    // Field order gives the derived chronological ordering.
    year: i32,
    month: u8,
    day: u8,
    millis: u32,
}

impl CalendarDate {
    /// Earliest supported year.
    pub const MIN_YEAR: i32 = -262_143;

    /// Latest supported year.
    pub const MAX_YEAR: i32 = 262_142;

    /// Earliest representable instant, January 1 of [`Self::MIN_YEAR`] at midnight.
    pub const MIN: Self = Self {
        year: Self::MIN_YEAR,
        month: 1,
        day: 1,
        millis: 0,
    };

    /// Latest representable instant, the last millisecond of [`Self::MAX_YEAR`].
    pub const MAX: Self = Self {
        year: Self::MAX_YEAR,
        month: 12,
        day: 31,
        millis: MILLIS_PER_DAY - 1,
    };

    /// Creates a new `CalendarDate` at midnight from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside the
    /// supported range, [`CalendarError::InvalidMonth`] if `month` is not in
    /// 1..=12, or [`CalendarError::InvalidDay`] if `day` does not exist in
    /// that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = month_length(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            millis: 0,
        })
    }

    /// `const` counterpart of [`CalendarDate::new`] for building constants.
    pub(crate) const fn new_const(year: i32, month: u8, day: u8) -> Option<Self> {
        if year < Self::MIN_YEAR
            || year > Self::MAX_YEAR
            || month < 1
            || month > 12
            || day < 1
            || day > month_length(year, month)
        {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            millis: 0,
        })
    }

    /// Creates a `CalendarDate` at midnight from a year and a calendar
    /// day-of-year (1..=365, or 1..=366 in leap years).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside the
    /// supported range, or [`CalendarError::InvalidDoy`] if `doy` does not
    /// exist in `year`.
    pub fn from_year_doy(year: i32, doy: u16) -> Result<Self, CalendarError> {
        check_year(year)?;
        let (month, day) = month_day_from_doy(year, doy)?;
        Ok(Self {
            year,
            month,
            day,
            millis: 0,
        })
    }

    /// Returns a copy of this date with the given time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if any component is out of range.
    pub fn with_time(
        self,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        let millis = ((u32::from(hour) * 60 + u32::from(minute)) * 60 + u32::from(second)) * 1000
            + u32::from(millisecond);
        Ok(Self { millis, ..self })
    }

    /// Returns a copy of this date with the time-of-day set to `millis`
    /// milliseconds after midnight.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if `millis` is a full day or more.
    pub fn with_millis_of_day(self, millis: u32) -> Result<Self, CalendarError> {
        if millis >= MILLIS_PER_DAY {
            return Err(CalendarError::OutOfRange {
                reason: format!("{millis} ms is not within one day"),
            });
        }
        Ok(Self { millis, ..self })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        (self.millis / 3_600_000) as u8
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        (self.millis / 60_000 % 60) as u8
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        (self.millis / 1000 % 60) as u8
    }

    /// Returns the millisecond (0..=999).
    pub fn millisecond(self) -> u16 {
        (self.millis % 1000) as u16
    }

    /// Returns the time-of-day as milliseconds after midnight.
    pub fn millis_of_day(self) -> u32 {
        self.millis
    }

    /// Returns the same calendar day at midnight.
    pub fn date(self) -> Self {
        Self { millis: 0, ..self }
    }

    /// Returns `true` if the date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        month_length(self.year, self.month)
    }

    /// Returns a copy with the day of month replaced, clamped to
    /// `1..=days_in_month`. The time-of-day is kept.
    pub fn with_day_clamped(self, day: u8) -> Self {
        Self {
            day: day.clamp(1, self.days_in_month()),
            ..self
        }
    }

    /// Returns the first day of this date's month at midnight.
    pub fn first_of_month(self) -> Self {
        Self {
            day: 1,
            millis: 0,
            ..self
        }
    }

    /// Returns the last day of this date's month at midnight.
    pub fn last_of_month(self) -> Self {
        Self {
            day: self.days_in_month(),
            millis: 0,
            ..self
        }
    }

    /// Returns the first day of the following month at midnight, or `None`
    /// past December of [`Self::MAX_YEAR`].
    ///
    /// December wraps to January of the following year.
    pub fn next_month(self) -> Option<Self> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month, 1).ok()
    }

    /// Returns the first day of the preceding month at midnight, or `None`
    /// before January of [`Self::MIN_YEAR`].
    ///
    /// January wraps to December of the preceding year.
    pub fn prev_month(self) -> Option<Self> {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month, 1).ok()
    }

    /// Returns the next calendar day, keeping the time-of-day, or `None`
    /// after December 31 of [`Self::MAX_YEAR`].
    ///
    /// Month ends roll over to the first of the next month, and December 31
    /// wraps to January 1 of the following year.
    pub fn next_day(self) -> Option<Self> {
        if self.day < self.days_in_month() {
            Some(Self {
                day: self.day + 1,
                ..self
            })
        } else {
            let first = self.next_month()?;
            Some(Self {
                millis: self.millis,
                ..first
            })
        }
    }

    /// Converts to a `chrono::NaiveDate`, dropping the time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the year is outside chrono's range.
    pub fn to_naive_date(self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day)).ok_or_else(
            || CalendarError::OutOfRange {
                reason: format!("{self} is outside the chrono date range"),
            },
        )
    }

    /// Converts to a `chrono::NaiveDateTime`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the year is outside chrono's range.
    pub fn to_naive_datetime(self) -> Result<NaiveDateTime, CalendarError> {
        let date = self.to_naive_date()?;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(
            self.millis / 1000,
            (self.millis % 1000) * 1_000_000,
        )
        .ok_or_else(|| CalendarError::OutOfRange {
            reason: format!("{} ms is not a valid time of day", self.millis),
        })?;
        Ok(date.and_time(time))
    }

    fn parse(input: &str) -> Result<Self, CalendarError> {
        let err = |reason: &str| CalendarError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        };
        let input_trimmed = input.trim();
        let (date_part, time_part) = match input_trimmed.find(['T', ' ']) {
            Some(i) => (&input_trimmed[..i], Some(&input_trimmed[i + 1..])),
            None => (input_trimmed, None),
        };
        let (negative, body) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let mut fields = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(err("expected YYYY-MM-DD"));
        };
        let year: i32 = y.parse().map_err(|_| err("year is not a number"))?;
        let month: u8 = m.parse().map_err(|_| err("month is not a number"))?;
        let day: u8 = d.parse().map_err(|_| err("day is not a number"))?;
        let year = if negative { -year } else { year };
        let date = Self::new(year, month, day)?;

        let Some(time) = time_part else {
            return Ok(date);
        };
        let mut fields = time.splitn(3, ':');
        let (Some(h), Some(min)) = (fields.next(), fields.next()) else {
            return Err(err("expected HH:MM[:SS[.mmm]]"));
        };
        let hour: u8 = h.parse().map_err(|_| err("hour is not a number"))?;
        let minute: u8 = min.parse().map_err(|_| err("minute is not a number"))?;
        let (second, millisecond) = match fields.next() {
            None => (0, 0),
            Some(sec) => {
                let (whole, fraction) = match sec.split_once('.') {
                    Some((whole, fraction)) => (whole, Some(fraction)),
                    None => (sec, None),
                };
                let second: u8 = whole.parse().map_err(|_| err("second is not a number"))?;
                let millisecond = match fraction {
                    None => 0,
                    Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
                        // Sub-millisecond digits are truncated.
                        let digits: String = f.chars().chain("00".chars()).take(3).collect();
                        digits.parse().map_err(|_| err("invalid fraction"))?
                    }
                    Some(_) => return Err(err("invalid fraction of a second")),
                };
                (second, millisecond)
            }
        };
        date.with_time(hour, minute, second, millisecond)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", -i64::from(self.year))?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)?;
        if self.millis != 0 {
            write!(
                f,
                "T{:02}:{:02}:{:02}",
                self.hour(),
                self.minute(),
                self.second()
            )?;
            if self.millisecond() != 0 {
                write!(f, ".{:03}", self.millisecond())?;
            }
        }
        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<NaiveDateTime> for CalendarDate {
    type Error = CalendarError;

    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        // chrono encodes leap seconds as nanosecond >= 1e9.
        let sub_millis = (datetime.nanosecond() / 1_000_000).min(999);
        Self::try_from(datetime.date())?
            .with_millis_of_day(datetime.num_seconds_from_midnight() * 1000 + sub_millis)
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::InvalidYear {
            year,
            min: CalendarDate::MIN_YEAR,
            max: CalendarDate::MAX_YEAR,
        })
    }
}
