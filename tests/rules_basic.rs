#![forbid(unsafe_code)]
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use writable_calendar::{easter_sunday, RuleSet, YearCalendar};

fn resolve(year: i32) -> YearCalendar {
    RuleSet::builtin().resolve_year(year).unwrap()
}

fn dates_labeled(calendar: &YearCalendar, name: &str) -> Vec<NaiveDate> {
    calendar
        .days()
        .iter()
        .filter(|(_, labels)| labels.iter().any(|l| l == name))
        .map(|(date, _)| *date)
        .collect()
}

#[test]
fn easter_reference_dates() {
    let expected = [
        (2000, 4, 23),
        (2008, 3, 23),
        (2024, 3, 31),
        (2025, 4, 20),
        (2038, 4, 25),
    ];
    for (year, month, day) in expected {
        assert_eq!(
            easter_sunday(year).unwrap(),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            "easter {year}"
        );
    }
}

#[test]
fn easter_rejects_pre_gregorian_years() {
    assert!(easter_sunday(1500).is_err());
    assert!(easter_sunday(1583).is_ok());
}

#[test]
fn moveable_feasts_keep_their_easter_offsets() {
    for year in 2020..=2040 {
        let calendar = resolve(year);
        let easter = easter_sunday(year).unwrap();
        assert_eq!(dates_labeled(&calendar, "Good Friday"), vec![easter - Duration::days(2)]);
        assert_eq!(dates_labeled(&calendar, "Pentecost"), vec![easter + Duration::days(49)]);
    }
}

#[test]
fn labor_day_is_first_monday_of_september() {
    for year in 2000..=2050 {
        let dates = dates_labeled(&resolve(year), "Labor Day");
        assert_eq!(dates.len(), 1, "year {year}");
        let d = dates[0];
        assert_eq!(d.month(), 9);
        assert!(d.day() <= 7, "year {year}: {d}");
        assert_eq!(d.weekday(), Weekday::Mon);
    }
}

#[test]
fn memorial_day_is_last_monday_of_may() {
    for year in 2000..=2050 {
        let dates = dates_labeled(&resolve(year), "Memorial Day");
        assert_eq!(dates.len(), 1, "year {year}");
        let d = dates[0];
        assert_eq!(d.month(), 5);
        assert!(d.day() >= 25, "year {year}: {d}");
        assert_eq!(d.weekday(), Weekday::Mon);
    }
}

#[test]
fn fixed_rules_resolve_inside_the_requested_year() {
    for year in [1583, 1900, 2025, 2100, 9999] {
        let calendar = resolve(year);
        assert_eq!(calendar.year(), year);
        for date in calendar.days().keys() {
            assert_eq!(date.year(), year, "{date}");
        }
    }
}

#[test]
fn general_conference_covers_the_first_weekend() {
    for year in 2000..=2050 {
        let calendar = resolve(year);
        let dates = dates_labeled(&calendar, "General Conference");
        assert_eq!(dates.len(), 4, "year {year}");
        for pair in dates.chunks(2) {
            let (saturday, sunday) = (pair[0], pair[1]);
            assert_eq!(saturday.weekday(), Weekday::Sat);
            assert!(saturday.day() <= 7, "{saturday}");
            assert!(matches!(saturday.month(), 4 | 10));
            assert_eq!(sunday, saturday + Duration::days(1));
        }
    }
}

#[test]
fn resolution_is_deterministic() {
    for year in [2024, 2025, 2026] {
        assert_eq!(resolve(year), resolve(year));
    }
}

#[test]
fn shared_dates_keep_rule_table_order() {
    // Easter 1959 fell on March 29, so Good Friday collides with the fixed
    // Kirtland date; the moveable feast is evaluated first.
    let calendar = resolve(1959);
    let date = NaiveDate::from_ymd_opt(1959, 3, 27).unwrap();
    assert_eq!(
        calendar.labels_for(date),
        ["Good Friday", "Kirtland Temple Dedication"]
    );

    // Easter 1980 fell on April 6, first-weekend Sunday and a history date.
    let calendar = resolve(1980);
    let date = NaiveDate::from_ymd_opt(1980, 4, 6).unwrap();
    assert_eq!(
        calendar.labels_for(date),
        ["Easter", "General Conference", "Church Organization"]
    );
}

#[test]
fn pioneer_day_is_july_24() {
    let calendar = resolve(2025);
    let date = NaiveDate::from_ymd_opt(2025, 7, 24).unwrap();
    assert_eq!(calendar.labels_for(date), ["Pioneer Day"]);
}
