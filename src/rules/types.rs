use chrono::Weekday;
use thiserror::Error;

/// One way of placing an observance in a given year.
///
/// Rules are data, not code: the resolver evaluates every variant through the
/// same path, which keeps new holidays a one-line addition to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Same month/day every year (e.g. Pioneer Day, July 24).
    Fixed { month: u32, day: u32 },
    /// Nth occurrence of a weekday in a month (e.g. 1st Monday of September).
    NthWeekday {
        month: u32,
        weekday: Weekday,
        nth: u8,
    },
    /// Last occurrence of a weekday in a month (e.g. last Monday of May).
    LastWeekday { month: u32, weekday: Weekday },
    /// Signed day offset from Easter Sunday (e.g. -2 for Good Friday).
    EasterOffset { days: i64 },
    /// First Saturday of the month and the Sunday right after it.
    FirstWeekend { month: u32 },
}

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("month {month} has no {nth}th requested weekday")]
    NthWeekdayOutOfMonth { month: u32, nth: u8 },
    #[error("year {0} is outside the supported Gregorian range (1583..=9999)")]
    UnsupportedYear(i32),
    #[error("{name}: {reason}")]
    OutsideYear { name: String, reason: String },
}
