use approx::assert_abs_diff_eq;
use dekadal_calendar::{
    CalendarDate, CalendarError, DEFAULT_REFERENCE, DoyConvention, calendar_fields,
    date_from_days, day_of_year, days_in_year, days_since, julian_day, month_day_from_doy,
};

#[test]
fn doy_roundtrip_leap_and_common() {
    for year in [1900, 1999, 2000, 2024] {
        for d in 1..=days_in_year(year) {
            let date = CalendarDate::from_year_doy(year, d).unwrap();
            assert_eq!(
                day_of_year(date),
                d,
                "roundtrip failed for {year} doy {d}: got {date}"
            );
            assert_eq!(month_day_from_doy(year, d).unwrap(), (date.month(), date.day()));
        }
    }
}

#[test]
fn fixed366_matches_calendar_in_leap_years() {
    for d in 1..=366u16 {
        let date = CalendarDate::from_year_doy(2000, d).unwrap();
        assert_eq!(
            calendar_fields(date, DoyConvention::Fixed366).doy,
            calendar_fields(date, DoyConvention::Calendar).doy,
            "mismatch on {date}"
        );
    }
}

#[test]
fn feb_29_rejected_in_common_years() {
    let err = CalendarDate::new(1999, 2, 29).unwrap_err();
    assert_eq!(
        err,
        CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 1999,
            max_day: 28,
        }
    );
    assert!(CalendarDate::new(1900, 2, 29).is_err());
    assert!(CalendarDate::new(2000, 2, 29).is_ok());
}

#[test]
fn julian_day_is_linear_in_days() {
    let a = CalendarDate::new(2014, 1, 1).unwrap();
    let b = CalendarDate::new(2015, 1, 1).unwrap();
    assert_abs_diff_eq!(julian_day(b) - julian_day(a), 365.0);
    assert_abs_diff_eq!(days_since(b, a), 365.0);
}

#[test]
fn day_counts_roundtrip_through_default_reference() {
    let dates = [
        "1900-01-01",
        "1899-06-30T06:00:00",
        "1970-01-01T00:00:00.001",
        "2000-02-29T23:59:59.999",
        "2100-12-31T12:00",
    ];
    for s in dates {
        let date: CalendarDate = s.parse().unwrap();
        let days = days_since(date, DEFAULT_REFERENCE);
        assert_eq!(
            date_from_days(days, DEFAULT_REFERENCE).unwrap(),
            date,
            "roundtrip failed for {s} ({days} days)"
        );
    }
}

#[test]
fn serde_uses_iso_strings() {
    let date = CalendarDate::new(2014, 12, 20)
        .unwrap()
        .with_time(6, 0, 0, 0)
        .unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, "\"2014-12-20T06:00:00\"");
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
    assert!(serde_json::from_str::<CalendarDate>("\"2014-13-01\"").is_err());
}
