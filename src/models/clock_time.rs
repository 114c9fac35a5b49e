//! Clock time model.
//!
//! A [`ClockTime`] is a local wall-clock time written as `HH:MM` (24-hour, no
//! timezone), the form in which start and end times are captured for a work day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A local clock time with minute precision.
///
/// Parsing is strict: exactly two hour digits (`00`-`23`), a colon, and two
/// minute digits (`00`-`59`). Serializes as the same `HH:MM` string.
///
/// # Example
///
/// ```
/// use workday_engine::models::ClockTime;
///
/// let time: ClockTime = "22:30".parse().unwrap();
/// assert_eq!(time.minutes_since_midnight(), 1350);
/// assert_eq!(time.to_string(), "22:30");
///
/// assert!("7:30".parse::<ClockTime>().is_err());
/// assert!("24:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Builds a clock time from hour and minute components.
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the number of minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.0.hour()) * 60 + i64::from(self.0.minute())
    }

    /// Returns the underlying chrono time.
    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

fn two_digits(part: &str) -> Option<u32> {
    if part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidTime {
            value: s.to_string(),
        };

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let hour = two_digits(hours).ok_or_else(invalid)?;
        let minute = two_digits(minutes).ok_or_else(invalid)?;

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
