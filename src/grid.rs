use crate::model::YearCalendar;
use crate::rules::RuleError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Header labels, Sunday first, matching the grid column order.
pub const WEEKDAY_HEADER: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Fixed number of week rows per month page. Months never need more than six
/// Sunday-first rows; shorter months leave trailing rows empty for notes.
pub const WEEK_ROWS: usize = 6;

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// One occupied day slot of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub weekend: bool,
    pub labels: Vec<String>,
}

/// Fixed 6x7 Sunday-first layout of one month. `None` slots are the padding
/// cells before day 1 and after month end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    pub fn build(year: i32, month: u32, calendar: &YearCalendar) -> Result<Self, RuleError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(RuleError::InvalidDate {
            year,
            month,
            day: 1,
        })?;

        let mut weeks: Vec<[Option<DayCell>; 7]> = (0..WEEK_ROWS)
            .map(|_| std::array::from_fn(|_| None))
            .collect();

        let mut slot = first.weekday().num_days_from_sunday() as usize;
        let mut date = first;
        while date.month() == month {
            let weekday = date.weekday();
            weeks[slot / 7][slot % 7] = Some(DayCell {
                date,
                day: date.day(),
                weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
                labels: calendar.labels_for(date).to_vec(),
            });
            slot += 1;
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(Self { year, month, weeks })
    }
}
