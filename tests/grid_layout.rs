#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate};
use writable_calendar::{MonthGrid, RuleSet, YearCalendar, WEEK_ROWS};

#[test]
fn weekend_flags_mark_exactly_the_sunday_and_saturday_columns() {
    let calendar = RuleSet::builtin().resolve_year(2025).unwrap();
    for month in 1..=12 {
        let grid = MonthGrid::build(2025, month, &calendar).unwrap();
        for week in &grid.weeks {
            for (column, slot) in week.iter().enumerate() {
                if let Some(cell) = slot {
                    assert_eq!(
                        cell.weekend,
                        column == 0 || column == 6,
                        "month {month}, day {}",
                        cell.day
                    );
                }
            }
        }
    }
}

#[test]
fn every_day_appears_once_and_in_order() {
    let calendar = YearCalendar::new(2025);
    let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for month in 1..=12 {
        let grid = MonthGrid::build(2025, month, &calendar).unwrap();
        let days: Vec<u32> = grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .map(|cell| cell.day)
            .collect();
        let expected: Vec<u32> = (1..=lengths[month as usize - 1]).collect();
        assert_eq!(days, expected, "month {month}");
    }
}

#[test]
fn leading_padding_aligns_the_first_weekday() {
    let calendar = YearCalendar::new(2025);
    for month in 1..=12 {
        let grid = MonthGrid::build(2025, month, &calendar).unwrap();
        let first = NaiveDate::from_ymd_opt(2025, month, 1).unwrap();
        let offset = first.weekday().num_days_from_sunday() as usize;
        for (column, slot) in grid.weeks[0].iter().enumerate() {
            if column < offset {
                assert!(slot.is_none(), "month {month}, column {column}");
            } else {
                assert!(slot.is_some(), "month {month}, column {column}");
            }
        }
        assert_eq!(grid.weeks[0][offset].as_ref().unwrap().day, 1);
    }
}

#[test]
fn grid_always_has_six_week_rows() {
    let calendar = YearCalendar::new(2026);
    for month in 1..=12 {
        let grid = MonthGrid::build(2026, month, &calendar).unwrap();
        assert_eq!(grid.weeks.len(), WEEK_ROWS);
        for week in &grid.weeks {
            assert_eq!(week.len(), 7);
        }
    }
}

#[test]
fn observance_labels_land_in_their_day_cell() {
    let calendar = RuleSet::builtin().resolve_year(2025).unwrap();
    let grid = MonthGrid::build(2025, 7, &calendar).unwrap();
    let cell = grid
        .weeks
        .iter()
        .flatten()
        .flatten()
        .find(|cell| cell.day == 24)
        .unwrap();
    assert_eq!(cell.labels, ["Pioneer Day"]);
    // July 4, 2025 is a Friday, no weekend highlight despite the holiday.
    let fourth = grid
        .weeks
        .iter()
        .flatten()
        .flatten()
        .find(|cell| cell.day == 4)
        .unwrap();
    assert_eq!(fourth.labels, ["Independence Day"]);
    assert!(!fourth.weekend);
}
