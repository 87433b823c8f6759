//! Grouping of date collections into per-dekad buckets.

use std::collections::BTreeMap;

use dekadal_calendar::CalendarDate;
use tracing::debug;

use crate::boundary::{check_dekad, dekad_startdate_from_date};

/// Which canonical date identifies a dekad group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupKey {
    /// Key each group by its dekad end date (day 10, 20 or month end).
    #[default]
    EndDate,
    /// Key each group by its dekad start date (day 1, 11 or 21).
    StartDate,
}

impl GroupKey {
    /// Returns the key of the dekad containing `date`.
    pub fn key_for(self, date: CalendarDate) -> CalendarDate {
        match self {
            GroupKey::EndDate => check_dekad(date),
            GroupKey::StartDate => dekad_startdate_from_date(date),
        }
    }
}

/// Dates bucketed by dekad, keyed by the dekad's start or end date.
///
/// Keys iterate in ascending order. Each bucket keeps its dates in the
/// order they appeared in the input.
pub type DekadGroups = BTreeMap<CalendarDate, Vec<CalendarDate>>;

/// Partitions `dates` by the dekad each one falls in.
///
/// # Example
///
/// ```
/// use dekadal_calendar::CalendarDate;
/// use dekadal_dekad::{GroupKey, group_into_dekads};
///
/// let d = |day| CalendarDate::new(2000, 1, day).unwrap();
/// let groups = group_into_dekads(&[d(10), d(11), d(12), d(23)], GroupKey::EndDate);
/// assert_eq!(groups[&d(20)], vec![d(11), d(12)]);
/// ```
#[tracing::instrument(level = "debug", skip(dates), fields(n_dates = dates.len()))]
pub fn group_into_dekads(dates: &[CalendarDate], key: GroupKey) -> DekadGroups {
    let mut groups = DekadGroups::new();
    for &date in dates {
        groups.entry(key.key_for(date)).or_default().push(date);
    }
    debug!(n_groups = groups.len(), "dates grouped into dekads");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn sample() -> Vec<CalendarDate> {
        vec![
            date(2000, 1, 10),
            date(2000, 1, 11),
            date(2000, 1, 12),
            date(2000, 1, 23),
        ]
    }

    #[test]
    fn keyed_by_end_date() {
        let groups = group_into_dekads(&sample(), GroupKey::EndDate);
        let expected = DekadGroups::from([
            (date(2000, 1, 10), vec![date(2000, 1, 10)]),
            (date(2000, 1, 20), vec![date(2000, 1, 11), date(2000, 1, 12)]),
            (date(2000, 1, 31), vec![date(2000, 1, 23)]),
        ]);
        assert_eq!(groups, expected);
    }

    #[test]
    fn keyed_by_start_date() {
        let groups = group_into_dekads(&sample(), GroupKey::StartDate);
        let expected = DekadGroups::from([
            (date(2000, 1, 1), vec![date(2000, 1, 10)]),
            (date(2000, 1, 11), vec![date(2000, 1, 11), date(2000, 1, 12)]),
            (date(2000, 1, 21), vec![date(2000, 1, 23)]),
        ]);
        assert_eq!(groups, expected);
    }

    #[test]
    fn preserves_input_order_within_group() {
        let dates = [date(2000, 1, 15), date(2000, 1, 3), date(2000, 1, 12)];
        let groups = group_into_dekads(&dates, GroupKey::default());
        assert_eq!(
            groups[&date(2000, 1, 20)],
            vec![date(2000, 1, 15), date(2000, 1, 12)]
        );
        assert_eq!(groups[&date(2000, 1, 10)], vec![date(2000, 1, 3)]);
    }

    #[test]
    fn duplicates_and_times_kept() {
        let noon = date(2000, 1, 5).with_time(12, 0, 0, 0).unwrap();
        let dates = [noon, noon, date(2000, 1, 5)];
        let groups = group_into_dekads(&dates, GroupKey::EndDate);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&date(2000, 1, 10)], dates.to_vec());
    }

    #[test]
    fn keys_ascend_for_unsorted_input() {
        let dates = [date(2001, 3, 1), date(2000, 12, 31), date(2001, 1, 15)];
        let groups = group_into_dekads(&dates, GroupKey::EndDate);
        let keys: Vec<CalendarDate> = groups.keys().copied().collect();
        assert_eq!(
            keys,
            vec![date(2000, 12, 31), date(2001, 1, 20), date(2001, 3, 10)]
        );
    }

    #[test]
    fn empty_input() {
        assert!(group_into_dekads(&[], GroupKey::StartDate).is_empty());
    }
}
