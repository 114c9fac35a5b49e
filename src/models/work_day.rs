//! Work day model.
//!
//! A [`WorkDay`] records one calendar day of vehicle/driver usage inside a
//! vehicle period: the clock times entered for the day and the hours derived
//! from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClockTime, DailyType};

/// One calendar day of usage within a vehicle period.
///
/// `duration` and `extra_hours` are only recomputed once both `start_time`
/// and `end_time` are present; until then they keep their previous values.
///
/// # Example
///
/// ```
/// use workday_engine::models::{DailyType, WorkDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = WorkDay::new(
///     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     DailyType::Disposition10,
///     Decimal::from(10),
/// );
/// assert!(!day.has_times());
/// assert_eq!(day.duration, Decimal::ZERO);
/// assert_eq!(day.extra_hours, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// The calendar day this record represents.
    pub date: NaiveDate,
    /// Start of usage, if entered.
    #[serde(default)]
    pub start_time: Option<ClockTime>,
    /// End of usage, if entered.
    #[serde(default)]
    pub end_time: Option<ClockTime>,
    /// The service type for the day.
    pub daily_type: DailyType,
    /// Contracted hours before overtime starts.
    pub regular_hours: Decimal,
    /// Total worked hours.
    #[serde(default)]
    pub duration: Decimal,
    /// Overtime hours, rounded up to whole hours.
    #[serde(default)]
    pub extra_hours: u32,
    /// Set once a person has confirmed an implausibly long shift.
    #[serde(default)]
    pub confirmed_extended_shift: bool,
}

impl WorkDay {
    /// Creates an empty work day with no times entered.
    pub fn new(date: NaiveDate, daily_type: DailyType, regular_hours: Decimal) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            daily_type,
            regular_hours,
            duration: Decimal::ZERO,
            extra_hours: 0,
            confirmed_extended_shift: false,
        }
    }

    /// Returns true if both start and end times have been entered.
    pub fn has_times(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// Returns both times when the day is complete.
    pub fn times(&self) -> Option<(ClockTime, ClockTime)> {
        Some((self.start_time?, self.end_time?))
    }
}
