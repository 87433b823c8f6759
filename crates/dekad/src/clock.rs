//! Sources of the current date.

use dekadal_calendar::CalendarDate;

/// Supplies "now" to operations whose range defaults to the current date.
pub trait Clock {
    /// Returns the current date and time-of-day.
    fn now(&self) -> CalendarDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CalendarDate {
        // The wall clock lies well inside the supported year range.
        CalendarDate::try_from(chrono::Local::now().naive_local()).unwrap_or(CalendarDate::MAX)
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn now(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> CalendarDate {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> CalendarDate {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock() {
        let date = CalendarDate::new(2014, 1, 3).unwrap();
        assert_eq!(FixedClock(date).now(), date);
    }

    #[test]
    fn clocks_behind_pointers() {
        let date = CalendarDate::new(2014, 1, 3).unwrap();
        let boxed: Box<dyn Clock> = Box::new(FixedClock(date));
        assert_eq!(boxed.now(), date);
        let by_ref: &dyn Clock = &FixedClock(date);
        assert_eq!(by_ref.now(), date);
    }

    #[test]
    fn system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.year() >= 2024);
    }
}
