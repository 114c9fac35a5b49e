//! Work day validation checks.

use rust_decimal::Decimal;

use crate::models::{ClockTime, WorkDay};

/// Checks that a work day is complete enough to bill.
///
/// True only if both times are entered and the numeric fields are non-negative.
///
/// # Example
///
/// ```
/// use workday_engine::calculation::validate_work_day;
/// use workday_engine::models::{DailyType, WorkDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut day = WorkDay::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), DailyType::Transfer, Decimal::ZERO);
/// assert!(!validate_work_day(&day));
///
/// day.start_time = Some("09:00".parse().unwrap());
/// day.end_time = Some("11:00".parse().unwrap());
/// assert!(validate_work_day(&day));
/// ```
pub fn validate_work_day(work_day: &WorkDay) -> bool {
    work_day.has_times()
        && work_day.duration >= Decimal::ZERO
        && work_day.regular_hours >= Decimal::ZERO
}

/// Checks that `start_time` is strictly earlier than `end_time` on the same day.
///
/// Does not apply the overnight reading: `"22:00"` to `"06:00"` is rejected.
/// Unparseable input is rejected.
///
/// # Example
///
/// ```
/// use workday_engine::calculation::validate_work_day_times;
///
/// assert!(validate_work_day_times("08:00", "17:00"));
/// assert!(!validate_work_day_times("22:00", "06:00"));
/// assert!(!validate_work_day_times("08:00", "08:00"));
/// ```
pub fn validate_work_day_times(start_time: &str, end_time: &str) -> bool {
    match (
        start_time.parse::<ClockTime>(),
        end_time.parse::<ClockTime>(),
    ) {
        (Ok(start), Ok(end)) => start < end,
        _ => false,
    }
}
