#![forbid(unsafe_code)]
//! Writable calendar — month-per-page `.docx` calendar generator.
//!
//! - Ordered rule table (fixed dates, Nth/last weekday, Easter offsets,
//!   first-weekend) resolved per year.
//! - Sunday-first month grids with weekend marking.
//! - Landscape letter pages with room to write notes in every day cell.
//! - Civil dates only (`NaiveDate`); no time zones involved.

pub mod document;
pub mod grid;
pub mod io;
pub mod model;
pub mod rules;

pub use document::{DocxRenderer, LayoutOptions};
pub use grid::{month_name, DayCell, MonthGrid, WEEKDAY_HEADER, WEEK_ROWS};
pub use io::{default_output_name, preflight};
pub use model::{Observance, YearCalendar};
pub use rules::{easter_sunday, DateRule, ObservanceRule, RuleError, RuleSet};
