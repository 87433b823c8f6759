use dekadal_calendar::{CalendarDate, date_sequence, day_of_year};

#[test]
fn leap_year_month_boundaries() {
    let start = CalendarDate::new(2000, 1, 1).unwrap();
    let dates = date_sequence(start, 366);
    assert_eq!(dates.len(), 366);

    // Index 30: Jan 31
    assert_eq!((dates[30].month(), dates[30].day()), (1, 31));
    // Index 59: Feb 29
    assert_eq!((dates[59].month(), dates[59].day()), (2, 29));
    // Index 60: Mar 1
    assert_eq!((dates[60].month(), dates[60].day()), (3, 1));
    // Index 365: Dec 31
    assert_eq!((dates[365].month(), dates[365].day()), (12, 31));
}

#[test]
fn doy_follows_sequence_position() {
    let start = CalendarDate::new(1999, 1, 1).unwrap();
    for (i, date) in date_sequence(start, 365).into_iter().enumerate() {
        assert_eq!(usize::from(day_of_year(date)), i + 1, "date {date}");
    }
}

#[test]
fn multi_year_transitions() {
    let start = CalendarDate::new(1999, 1, 1).unwrap();
    let dates = date_sequence(start, 731);

    // Index 364: Dec 31, 1999
    assert_eq!(dates[364], CalendarDate::new(1999, 12, 31).unwrap());
    // Index 365: Jan 1, 2000
    assert_eq!(dates[365], CalendarDate::new(2000, 1, 1).unwrap());
    // Index 730: Dec 31, 2000 (leap year)
    assert_eq!(dates[730], CalendarDate::new(2000, 12, 31).unwrap());
}

#[test]
fn length_always_matches() {
    let start = CalendarDate::new(2000, 1, 1).unwrap();
    for n_days in [0, 1, 100, 366, 1000] {
        let dates = date_sequence(start, n_days);
        assert_eq!(
            dates.len(),
            n_days,
            "expected length {n_days}, got {}",
            dates.len()
        );
    }
}
