use super::computus::{easter_sunday, SUPPORTED_YEARS};
use super::types::{DateRule, RuleError};
use super::{util, ObservanceRule};
use crate::model::{Observance, YearCalendar};
use chrono::{Duration, NaiveDate};

impl DateRule {
    /// Dates this rule produces in `year`, in display order.
    pub fn resolve(&self, year: i32) -> Result<Vec<NaiveDate>, RuleError> {
        match *self {
            DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day)
                .map(|d| vec![d])
                .ok_or(RuleError::InvalidDate { year, month, day }),
            DateRule::NthWeekday {
                month,
                weekday,
                nth,
            } => Ok(vec![util::nth_weekday(year, month, weekday, nth)?]),
            DateRule::LastWeekday { month, weekday } => {
                Ok(vec![util::last_weekday(year, month, weekday)?])
            }
            DateRule::EasterOffset { days } => {
                Ok(vec![easter_sunday(year)? + Duration::days(days)])
            }
            DateRule::FirstWeekend { month } => {
                let saturday = util::first_saturday(year, month)?;
                Ok(vec![saturday, saturday + Duration::days(1)])
            }
        }
    }
}

/// Evaluates the table top to bottom; per-date label order is table order.
pub(super) fn resolve_all(
    entries: &[ObservanceRule],
    year: i32,
) -> Result<YearCalendar, RuleError> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(RuleError::UnsupportedYear(year));
    }

    let mut calendar = YearCalendar::new(year);
    for entry in entries {
        for date in entry.rule.resolve(year)? {
            calendar
                .add(Observance::new(entry.name.clone(), date))
                .map_err(|reason| RuleError::OutsideYear {
                    name: entry.name.clone(),
                    reason,
                })?;
        }
    }
    Ok(calendar)
}
