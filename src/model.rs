use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named day pinned to a concrete date of one year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observance {
    pub name: String,
    pub date: NaiveDate,
}

impl Observance {
    pub fn new<N: Into<String>>(name: N, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// Every annotated day of one year, keyed by date.
///
/// Labels sharing a date keep the order their rules were evaluated in, so
/// rendering the same year twice produces identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearCalendar {
    year: i32,
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl YearCalendar {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            days: BTreeMap::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Records an observance, validating that its date lies inside the
    /// calendar's year.
    pub fn add(&mut self, observance: Observance) -> Result<(), String> {
        if observance.date.year() != self.year {
            return Err(format!(
                "{} resolved to {}, outside year {}",
                observance.name, observance.date, self.year
            ));
        }
        self.days
            .entry(observance.date)
            .or_default()
            .push(observance.name);
        Ok(())
    }

    /// Labels attached to `date`, in evaluation order. Empty for plain days.
    pub fn labels_for(&self, date: NaiveDate) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All annotated days in date order.
    pub fn days(&self) -> &BTreeMap<NaiveDate, Vec<String>> {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
