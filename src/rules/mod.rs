mod computus;
mod resolve;
mod types;
mod util;

pub use computus::easter_sunday;
pub use types::{DateRule, RuleError};

use crate::model::YearCalendar;
use chrono::Weekday;

/// One named observance and the rule placing it within a year.
#[derive(Debug, Clone)]
pub struct ObservanceRule {
    pub name: String,
    pub rule: DateRule,
}

/// Ordered rule table. Table order is evaluation order, which fixes the
/// display order of labels sharing a date.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<ObservanceRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push<N: Into<String>>(&mut self, name: N, rule: DateRule) {
        self.entries.push(ObservanceRule {
            name: name.into(),
            rule,
        });
    }

    pub fn entries(&self) -> &[ObservanceRule] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every rule for `year` into a calendar of labeled days.
    pub fn resolve_year(&self, year: i32) -> Result<YearCalendar, RuleError> {
        resolve::resolve_all(&self.entries, year)
    }

    /// The built-in observance table: US federal holidays, Christian moveable
    /// and fixed feasts, and LDS observances and history dates.
    pub fn builtin() -> Self {
        use DateRule::{EasterOffset, Fixed, FirstWeekend, LastWeekday, NthWeekday};

        let table: [(&str, DateRule); 24] = [
            ("New Year's Day", Fixed { month: 1, day: 1 }),
            (
                "Martin Luther King Jr. Day",
                NthWeekday {
                    month: 1,
                    weekday: Weekday::Mon,
                    nth: 3,
                },
            ),
            (
                "Presidents' Day",
                NthWeekday {
                    month: 2,
                    weekday: Weekday::Mon,
                    nth: 3,
                },
            ),
            (
                "Memorial Day",
                LastWeekday {
                    month: 5,
                    weekday: Weekday::Mon,
                },
            ),
            ("Independence Day", Fixed { month: 7, day: 4 }),
            (
                "Labor Day",
                NthWeekday {
                    month: 9,
                    weekday: Weekday::Mon,
                    nth: 1,
                },
            ),
            (
                "Columbus Day",
                NthWeekday {
                    month: 10,
                    weekday: Weekday::Mon,
                    nth: 2,
                },
            ),
            ("Veterans Day", Fixed { month: 11, day: 11 }),
            (
                "Thanksgiving",
                NthWeekday {
                    month: 11,
                    weekday: Weekday::Thu,
                    nth: 4,
                },
            ),
            ("Christmas", Fixed { month: 12, day: 25 }),
            ("Cesar Chavez Day", Fixed { month: 3, day: 31 }),
            ("Good Friday", EasterOffset { days: -2 }),
            ("Easter", EasterOffset { days: 0 }),
            ("Pentecost", EasterOffset { days: 49 }),
            (
                "Mother's Day",
                NthWeekday {
                    month: 5,
                    weekday: Weekday::Sun,
                    nth: 2,
                },
            ),
            (
                "Father's Day",
                NthWeekday {
                    month: 6,
                    weekday: Weekday::Sun,
                    nth: 3,
                },
            ),
            ("General Conference", FirstWeekend { month: 4 }),
            ("General Conference", FirstWeekend { month: 10 }),
            ("Pioneer Day", Fixed { month: 7, day: 24 }),
            ("First Vision", Fixed { month: 9, day: 21 }),
            ("Church Organization", Fixed { month: 4, day: 6 }),
            ("Kirtland Temple Dedication", Fixed { month: 3, day: 27 }),
            ("First Presidency Organized", Fixed { month: 4, day: 3 }),
            ("Joseph Smith Martyrdom", Fixed { month: 6, day: 27 }),
        ];

        let mut set = Self::new();
        for (name, rule) in table {
            set.push(name, rule);
        }
        set
    }
}
