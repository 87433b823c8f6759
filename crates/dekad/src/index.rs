//! Dekad index enumeration over a date range.

use std::ops::Index;

use dekadal_calendar::CalendarDate;
use tracing::debug;

use crate::boundary::check_dekad;
use crate::clock::Clock;
use crate::dekad::Dekad;

/// Ordered, de-duplicated dekad end-dates spanning a query range.
///
/// Elements are strictly increasing and every element is a dekad end date
/// at midnight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DekadIndex {
    dates: Vec<CalendarDate>,
}

impl DekadIndex {
    /// Returns the number of dekads in the index.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the index holds no dekads.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the earliest end date.
    pub fn first(&self) -> Option<CalendarDate> {
        self.dates.first().copied()
    }

    /// Returns the latest end date.
    pub fn last(&self) -> Option<CalendarDate> {
        self.dates.last().copied()
    }

    /// Iterates the end dates in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }

    /// Iterates the indexed dekads in ascending order.
    pub fn dekads(&self) -> impl Iterator<Item = Dekad> + '_ {
        self.dates.iter().map(|&d| Dekad::from_date(d))
    }

    /// Returns the end dates as a slice.
    pub fn as_slice(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Consumes the index, returning the end dates.
    pub fn into_vec(self) -> Vec<CalendarDate> {
        self.dates
    }

    /// Returns the position of the dekad containing `date`, if indexed.
    pub fn position(&self, date: CalendarDate) -> Option<usize> {
        self.dates.binary_search(&check_dekad(date)).ok()
    }
}

impl Index<usize> for DekadIndex {
    type Output = CalendarDate;

    fn index(&self, i: usize) -> &CalendarDate {
        &self.dates[i]
    }
}

impl IntoIterator for DekadIndex {
    type Item = CalendarDate;
    type IntoIter = std::vec::IntoIter<CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a DekadIndex {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

/// Builds the dekad index from the dekad containing `begin` through the
/// dekad containing `end`, inclusive.
///
/// Steps one dekad at a time: day 10 to day 20, day 20 to the month end, and
/// the month end to day 10 of the next month (December wraps into January
/// of the next year). If both dates share a dekad the index has exactly one
/// element; if `begin` falls in a later dekad than `end` it is empty.
///
/// # Example
///
/// ```
/// use dekadal_calendar::CalendarDate;
/// use dekadal_dekad::dekad_index;
///
/// let begin = CalendarDate::new(2000, 1, 5).unwrap();
/// let end = CalendarDate::new(2000, 3, 15).unwrap();
/// let index = dekad_index(begin, end);
/// assert_eq!(index.len(), 8);
/// assert_eq!(index.first(), Some(CalendarDate::new(2000, 1, 10).unwrap()));
/// assert_eq!(index.last(), Some(CalendarDate::new(2000, 3, 20).unwrap()));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(begin = %begin, end = %end))]
pub fn dekad_index(begin: CalendarDate, end: CalendarDate) -> DekadIndex {
    let dates: Vec<CalendarDate> = Dekad::range(begin, end).map(Dekad::end_date).collect();
    debug!(n_dekads = dates.len(), "dekad index built");
    DekadIndex { dates }
}

/// Builds the dekad index from the dekad containing `begin` through the
/// dekad containing the clock's current date.
pub fn dekad_index_until_now<C: Clock + ?Sized>(begin: CalendarDate, clock: &C) -> DekadIndex {
    dekad_index(begin, clock.now())
}
