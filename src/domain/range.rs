// src/domain/range.rs

use chrono::NaiveDate;

pub const SELECTION_KEY: &str = "selection";

/// The date-picker selection. Both ends are calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub key: String,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            key: SELECTION_KEY.to_string(),
        }
    }

    /// The empty selection: a single day, start == end.
    pub fn initial_on(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Calendar-day difference end - start. Negative when the ends are swapped.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// True when any of `dates` falls inside the selection.
    pub fn overlaps_any(&self, dates: &[NaiveDate]) -> bool {
        dates.iter().any(|d| self.contains(*d))
    }
}
