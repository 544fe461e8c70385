//! Time-of-day parsing and the [`TimeWindow`] value type.
//!
//! Shift and supplement rule times arrive as `"HH:MM"` strings from the
//! scheduling and settings stores. They are parsed once at the boundary into
//! [`NaiveTime`] so that a malformed value fails fast with
//! [`EngineError::InvalidTime`] instead of leaking into the arithmetic.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Parses a time of day in `HH:MM` form.
///
/// `HH:MM:SS` is also accepted because SQL `time` columns are delivered that
/// way; the seconds are ignored by all minute arithmetic.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_clock_time("22:30").unwrap(),
///     NaiveTime::from_hms_opt(22, 30, 0).unwrap()
/// );
/// assert!(parse_clock_time("25:00").is_err());
/// assert!(parse_clock_time("ab:cd").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            value: value.to_string(),
        })
}

/// Returns the number of whole minutes since midnight.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

/// A time-of-day interval that may wrap past midnight.
///
/// When `end` is earlier than `start` the window is read as running from
/// `start` on one day to `end` on the next.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeWindow;
///
/// let night = TimeWindow::parse("22:00", "06:00").unwrap();
/// assert!(night.wraps_midnight());
/// assert_eq!(night.duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// End of the window; earlier than `start` for overnight windows.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Creates a window from already parsed times.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses both ends of a window from `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: parse_clock_time(start)?,
            end: parse_clock_time(end)?,
        })
    }

    /// Returns true when the window runs past midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Start of the window in minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        minutes_since_midnight(self.start)
    }

    /// End of the window in minutes since midnight, without wrap correction.
    pub fn end_minutes(&self) -> i64 {
        minutes_since_midnight(self.end)
    }

    /// Length of the window in minutes, adding a day when it wraps midnight.
    ///
    /// A window whose start equals its end has zero length.
    pub fn duration_minutes(&self) -> i64 {
        let raw = self.end_minutes() - self.start_minutes();
        if raw < 0 { raw + MINUTES_PER_DAY } else { raw }
    }
}

/// Serde adapter storing a [`NaiveTime`] as `"HH:MM"`.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional `"HH:MM"` values; `null` or a missing field maps to `None`.
pub(crate) mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| super::parse_clock_time(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
