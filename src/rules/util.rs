use super::types::RuleError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub(super) fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, RuleError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(RuleError::InvalidDate {
        year,
        month,
        day: 1,
    })
}

pub(super) fn last_of_month(year: i32, month: u32) -> Result<NaiveDate, RuleError> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or(RuleError::InvalidDate {
            year,
            month,
            day: 31,
        })
}

/// Nth occurrence of `weekday` in the month. Errors if the month runs out
/// before the Nth hit (possible for nth >= 5).
pub(super) fn nth_weekday(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u8,
) -> Result<NaiveDate, RuleError> {
    let first = first_of_month(year, month)?;
    let to_first_hit = (7 + weekday.num_days_from_sunday() as i64
        - first.weekday().num_days_from_sunday() as i64)
        % 7;
    let date = first + Duration::days(to_first_hit + 7 * (i64::from(nth) - 1));
    if date.month() != month {
        return Err(RuleError::NthWeekdayOutOfMonth { month, nth });
    }
    Ok(date)
}

pub(super) fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Result<NaiveDate, RuleError> {
    let last = last_of_month(year, month)?;
    let back = (7 + last.weekday().num_days_from_sunday() as i64
        - weekday.num_days_from_sunday() as i64)
        % 7;
    Ok(last - Duration::days(back))
}

/// Always day 1..=7 of the month.
pub(super) fn first_saturday(year: i32, month: u32) -> Result<NaiveDate, RuleError> {
    nth_weekday(year, month, Weekday::Sat, 1)
}
