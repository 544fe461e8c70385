//! Shift model.
//!
//! A [`Shift`] is a query result from the scheduling store: a date, a
//! time-of-day range that may run past midnight, an unpaid break and the
//! weekend/holiday flags the roster already resolved.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::time_window::{TimeWindow, hhmm};

/// Represents one rostered shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// The start time of the shift.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// The end time of the shift. Earlier than `start_time` for overnight shifts.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the roster marks the shift as a weekend shift.
    #[serde(default)]
    pub is_weekend: bool,
    /// Whether the roster marks the shift as a public holiday shift.
    #[serde(default)]
    pub is_holiday: bool,
}

impl Shift {
    /// Builds a shift from `HH:MM` strings, failing on malformed times.
    ///
    /// Break minutes and the weekend/holiday flags start out zero/false.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Shift;
    /// use chrono::NaiveDate;
    ///
    /// let shift = Shift::new(
    ///     "shift_001",
    ///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     "22:00",
    ///     "06:00",
    /// )
    /// .unwrap();
    /// assert_eq!(shift.duration_minutes(), 480);
    /// ```
    pub fn new(id: &str, date: NaiveDate, start_time: &str, end_time: &str) -> EngineResult<Self> {
        let window = TimeWindow::parse(start_time, end_time)?;
        Ok(Self {
            id: id.to_string(),
            date,
            start_time: window.start,
            end_time: window.end,
            break_minutes: 0,
            is_weekend: false,
            is_holiday: false,
        })
    }

    /// Sets the unpaid break length.
    pub fn with_break(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Marks the shift as a weekend shift.
    pub fn weekend(mut self) -> Self {
        self.is_weekend = true;
        self
    }

    /// Marks the shift as a holiday shift.
    pub fn holiday(mut self) -> Self {
        self.is_holiday = true;
        self
    }

    /// The shift's time-of-day window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Gross shift length in minutes after overnight correction.
    pub fn duration_minutes(&self) -> i64 {
        self.window().duration_minutes()
    }

    /// Returns the day of the week the shift starts on.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
