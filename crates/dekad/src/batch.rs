//! Order-preserving batch application of dekad rules.
//!
//! Every batch operation is equivalent to applying its scalar counterpart to
//! each element independently. Inputs at or above [`PAR_THRESHOLD`] elements
//! are processed with rayon; output order always matches input order.
//!
//! Error policy: `*_isolated` and `*_batch` functions return one `Result` per
//! element, so a failing element never affects the others. [`try_map_dates`]
//! is all-or-nothing and reports the first error in input order.

use dekadal_calendar::CalendarDate;
use rayon::prelude::*;

use crate::boundary::{check_dekad, dekad_startdate_from_date};
use crate::error::DekadError;
use crate::period::running_dekad_to_date;

/// Minimum input length for parallel processing.
pub const PAR_THRESHOLD: usize = 4096;

fn map_ordered<I, T, F>(items: &[I], f: F) -> Vec<T>
where
    I: Copy + Sync,
    T: Send,
    F: Fn(I) -> T + Sync + Send,
{
    if items.len() < PAR_THRESHOLD {
        items.iter().map(|&item| f(item)).collect()
    } else {
        items.par_iter().map(|&item| f(item)).collect()
    }
}

/// Applies `f` to every date, preserving input order.
pub fn map_dates<T, F>(dates: &[CalendarDate], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(CalendarDate) -> T + Sync + Send,
{
    map_ordered(dates, f)
}

/// Applies a fallible `f` to every date, keeping each element's outcome.
pub fn map_dates_isolated<T, E, F>(dates: &[CalendarDate], f: F) -> Vec<Result<T, E>>
where
    T: Send,
    E: Send,
    F: Fn(CalendarDate) -> Result<T, E> + Sync + Send,
{
    map_ordered(dates, f)
}

/// Applies a fallible `f` to every date, failing as a whole if any element fails.
///
/// # Errors
///
/// Returns the error of the earliest failing element in input order.
pub fn try_map_dates<T, E, F>(dates: &[CalendarDate], f: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(CalendarDate) -> Result<T, E> + Sync + Send,
{
    map_ordered(dates, f).into_iter().collect()
}

/// Batch form of [`check_dekad`].
pub fn check_dekad_batch(dates: &[CalendarDate]) -> Vec<CalendarDate> {
    map_dates(dates, check_dekad)
}

/// Batch form of [`dekad_startdate_from_date`].
pub fn dekad_startdate_batch(dates: &[CalendarDate]) -> Vec<CalendarDate> {
    map_dates(dates, dekad_startdate_from_date)
}

/// Batch form of [`running_dekad_to_date`] over running numbers counted from
/// `year`, with per-element error isolation.
pub fn running_dekad_to_date_batch(
    year: i32,
    running: &[i32],
) -> Vec<Result<CalendarDate, DekadError>> {
    map_ordered(running, |n| running_dekad_to_date(year, n))
}
