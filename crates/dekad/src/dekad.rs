//! The dekad value type and dekad-by-dekad iteration.

use std::fmt;

use dekadal_calendar::CalendarDate;

use crate::boundary::day_to_dekad;
use crate::error::DekadError;

/// One of the three dekads of a month: days 1–10, 11–20 or 21–end.
///
/// Dekads order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dekad {
    // First day of the month at midnight; field order gives the ordering.
    month_start: CalendarDate,
    number: u8,
}

impl Dekad {
    /// Creates the `number`-th dekad (1..=3) of `month` in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`DekadError::InvalidDekadNumber`] if `number` is not in 1..=3,
    /// or [`DekadError::Calendar`] if `month` is not in 1..=12.
    pub fn new(year: i32, month: u8, number: u8) -> Result<Self, DekadError> {
        if !(1..=3).contains(&number) {
            return Err(DekadError::InvalidDekadNumber { dekad: number });
        }
        let month_start = CalendarDate::new(year, month, 1)?;
        Ok(Self {
            month_start,
            number,
        })
    }

    /// Returns the dekad containing `date`.
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            month_start: date.first_of_month(),
            number: day_to_dekad(date.day()),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.month_start.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month_start.month()
    }

    /// Returns the dekad number within the month (1..=3).
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the first day of month covered by this dekad (1, 11 or 21).
    pub fn start_day(self) -> u8 {
        match self.number {
            1 => 1,
            2 => 11,
            _ => 21,
        }
    }

    /// Returns the last day of month covered by this dekad
    /// (10, 20 or the month length).
    pub fn end_day(self) -> u8 {
        match self.number {
            1 => 10,
            2 => 20,
            _ => self.month_start.days_in_month(),
        }
    }

    /// Returns the canonical start date at midnight.
    pub fn start_date(self) -> CalendarDate {
        self.month_start.with_day_clamped(self.start_day())
    }

    /// Returns the canonical end date at midnight.
    pub fn end_date(self) -> CalendarDate {
        self.month_start.with_day_clamped(self.end_day())
    }

    /// Returns the number of days in this dekad (8..=11).
    pub fn len_days(self) -> u8 {
        self.end_day() - self.start_day() + 1
    }

    /// Returns `true` if `date` falls within this dekad.
    pub fn contains(self, date: CalendarDate) -> bool {
        Self::from_date(date) == self
    }

    /// Returns the position of this dekad within its year (1..=36).
    pub fn period(self) -> u8 {
        (self.month() - 1) * 3 + self.number
    }

    /// Returns the following dekad, rolling into the next month and year.
    ///
    /// `None` after the last dekad of [`CalendarDate::MAX_YEAR`].
    pub fn next(self) -> Option<Self> {
        if self.number < 3 {
            Some(Self {
                number: self.number + 1,
                ..self
            })
        } else {
            Some(Self {
                month_start: self.month_start.next_month()?,
                number: 1,
            })
        }
    }

    /// Returns the preceding dekad, rolling back into the previous month and year.
    ///
    /// `None` before the first dekad of [`CalendarDate::MIN_YEAR`].
    pub fn prev(self) -> Option<Self> {
        if self.number > 1 {
            Some(Self {
                number: self.number - 1,
                ..self
            })
        } else {
            Some(Self {
                month_start: self.month_start.prev_month()?,
                number: 3,
            })
        }
    }

    /// Iterates the dekads from the one containing `begin` through the one
    /// containing `end`, inclusive. Empty when `begin` falls in a later
    /// dekad than `end`.
    pub fn range(begin: CalendarDate, end: CalendarDate) -> DekadRange {
        DekadRange {
            next: Some(Self::from_date(begin)),
            last: Self::from_date(end),
        }
    }
}

impl fmt::Display for Dekad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02} D{}", self.year(), self.month(), self.number)
    }
}

/// Iterator over consecutive dekads, created by [`Dekad::range`].
#[derive(Debug, Clone)]
pub struct DekadRange {
    next: Option<Dekad>,
    last: Dekad,
}

impl Iterator for DekadRange {
    type Item = Dekad;

    fn next(&mut self) -> Option<Dekad> {
        let current = self.next?;
        if current > self.last {
            self.next = None;
            return None;
        }
        self.next = if current == self.last {
            None
        } else {
            current.next()
        };
        Some(current)
    }
}

impl std::iter::FusedIterator for DekadRange {}
