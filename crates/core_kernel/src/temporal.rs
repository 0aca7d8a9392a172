//! Calendar helpers shared by validation and reporting
//!
//! Claims carry a plain calendar date. Everything that compares against
//! "today" goes through [`today`] or takes the reference date explicitly, so
//! callers can pin the date when they need reproducible results.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the current calendar date (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// First day of the trailing window of `days` days ending on `end`
///
/// The window is inclusive at both ends: a 365-day window ending on
/// 2024-06-30 starts on 2023-07-01.
pub fn trailing_window_start(end: NaiveDate, days: u64) -> NaiveDate {
    end.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

/// A calendar month, rendered as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// The month a date belongs to
    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
            .map_err(|_| format!("Invalid month label: {}", value))?;
        Ok(Self::of(date))
    }
}
