//! Work-day hour and overtime calculation.
//!
//! This module turns a pair of clock times and a daily service type into the
//! worked duration and billable overtime for one calendar day.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ClockTime, DailyType, MINUTES_PER_DAY};

/// Overtime shorter than this many minutes is not billed.
pub const OVERTIME_TOLERANCE_MINUTES: i64 = 15;

const MINUTES_PER_HOUR: i64 = 60;

/// The hours derived for one work day.
///
/// # Example
///
/// ```
/// use workday_engine::calculation::WorkDayHours;
/// use rust_decimal::Decimal;
///
/// let hours = WorkDayHours {
///     duration: Decimal::from(11),
///     regular_hours: Decimal::from(10),
///     extra_hours: 1,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayHours {
    /// Total worked hours, unrounded.
    pub duration: Decimal,
    /// The contracted hours passed in by the caller.
    pub regular_hours: Decimal,
    /// Billable overtime in whole hours.
    pub extra_hours: u32,
}

/// Calculates worked and overtime hours for a day from `HH:MM` strings.
///
/// An end time earlier than the start time is read as crossing midnight once.
/// Equal start and end times yield a zero duration.
///
/// # Arguments
///
/// * `start_time` - Start of usage, `HH:MM`
/// * `end_time` - End of usage, `HH:MM`
/// * `daily_type` - The service type for the day
/// * `regular_hours` - Contracted hours before overtime applies
///
/// # Errors
///
/// Returns `InvalidTime` if either string is not a valid `HH:MM` time.
///
/// # Examples
///
/// ```
/// use workday_engine::calculation::calculate_work_day_hours;
/// use workday_engine::models::DailyType;
/// use rust_decimal::Decimal;
///
/// let hours = calculate_work_day_hours("08:00", "17:00", DailyType::Disposition10, Decimal::from(10))?;
/// assert_eq!(hours.duration, Decimal::from(9));
/// assert_eq!(hours.extra_hours, 0);
///
/// // Overnight: 22:00 to 06:00 is 8 hours
/// let hours = calculate_work_day_hours("22:00", "06:00", DailyType::Disposition12, Decimal::from(12))?;
/// assert_eq!(hours.duration, Decimal::from(8));
/// # Ok::<(), workday_engine::error::EngineError>(())
/// ```
pub fn calculate_work_day_hours(
    start_time: &str,
    end_time: &str,
    daily_type: DailyType,
    regular_hours: Decimal,
) -> EngineResult<WorkDayHours> {
    let start: ClockTime = start_time.parse()?;
    let end: ClockTime = end_time.parse()?;
    Ok(work_day_hours(start, end, daily_type, regular_hours))
}

/// Calculates worked and overtime hours for a day from parsed clock times.
pub fn work_day_hours(
    start: ClockTime,
    end: ClockTime,
    daily_type: DailyType,
    regular_hours: Decimal,
) -> WorkDayHours {
    let duration_minutes = shift_minutes(start, end);
    let extra_hours = calculate_extra_hours(duration_minutes, daily_type, regular_hours);

    WorkDayHours {
        duration: Decimal::from(duration_minutes) / Decimal::from(MINUTES_PER_HOUR),
        regular_hours,
        extra_hours,
    }
}

/// Minutes from `start` to `end`, wrapping past midnight at most once.
pub fn shift_minutes(start: ClockTime, end: ClockTime) -> i64 {
    let minutes = end.minutes_since_midnight() - start.minutes_since_midnight();
    if minutes < 0 {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    }
}

/// Calculates billable overtime for a worked duration.
///
/// Transfers never accrue overtime. Otherwise any excess over the contracted
/// hours of at least [`OVERTIME_TOLERANCE_MINUTES`] is billed in whole hours,
/// rounded up.
///
/// # Examples
///
/// ```
/// use workday_engine::calculation::calculate_extra_hours;
/// use workday_engine::models::DailyType;
/// use rust_decimal::Decimal;
///
/// let ten = Decimal::from(10);
/// assert_eq!(calculate_extra_hours(10 * 60 + 10, DailyType::Disposition10, ten), 0);
/// assert_eq!(calculate_extra_hours(10 * 60 + 20, DailyType::Disposition10, ten), 1);
/// assert_eq!(calculate_extra_hours(14 * 60, DailyType::Transfer, Decimal::ZERO), 0);
/// ```
pub fn calculate_extra_hours(
    duration_minutes: i64,
    daily_type: DailyType,
    regular_hours: Decimal,
) -> u32 {
    if daily_type.is_transfer() {
        return 0;
    }

    let regular_minutes = regular_hours * Decimal::from(MINUTES_PER_HOUR);
    let duration = Decimal::from(duration_minutes);
    if duration <= regular_minutes {
        return 0;
    }

    let extra_minutes = duration - regular_minutes;
    if extra_minutes < Decimal::from(OVERTIME_TOLERANCE_MINUTES) {
        return 0;
    }

    (extra_minutes / Decimal::from(MINUTES_PER_HOUR))
        .ceil()
        .to_u32()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Extra hours
    // ==========================================================================

    #[test]
    fn test_within_contracted_day_no_overtime() {
        assert_eq!(
            calculate_extra_hours(9 * 60, DailyType::Disposition10, dec("10")),
            0
        );
        assert_eq!(
            calculate_extra_hours(10 * 60, DailyType::Disposition10, dec("10")),
            0
        );
    }

    #[test]
    fn test_excess_below_tolerance_no_overtime() {
        assert_eq!(
            calculate_extra_hours(10 * 60 + 10, DailyType::Disposition10, dec("10")),
            0
        );
        assert_eq!(
            calculate_extra_hours(10 * 60 + 14, DailyType::Disposition10, dec("10")),
            0
        );
    }

    #[test]
    fn test_excess_at_tolerance_bills_one_hour() {
        assert_eq!(
            calculate_extra_hours(10 * 60 + 15, DailyType::Disposition10, dec("10")),
            1
        );
    }

    #[test]
    fn test_excess_above_tolerance_rounds_up() {
        assert_eq!(
            calculate_extra_hours(10 * 60 + 20, DailyType::Disposition10, dec("10")),
            1
        );
        assert_eq!(
            calculate_extra_hours(12 * 60 + 1 + 60, DailyType::Disposition12, dec("12")),
            2
        );
    }

    #[test]
    fn test_whole_hour_excess_not_rounded() {
        assert_eq!(
            calculate_extra_hours(14 * 60, DailyType::Disposition12, dec("12")),
            2
        );
    }

    #[test]
    fn test_transfer_never_accrues_overtime() {
        assert_eq!(
            calculate_extra_hours(20 * 60, DailyType::Transfer, Decimal::ZERO),
            0
        );
        assert_eq!(
            calculate_extra_hours(20 * 60, DailyType::Transfer, dec("10")),
            0
        );
    }

    #[test]
    fn test_fractional_regular_hours() {
        // 8.5 hour contract, 9h worked: 30 minutes excess bills one hour
        assert_eq!(
            calculate_extra_hours(9 * 60, DailyType::Disposition10, dec("8.5")),
            1
        );
    }

    // ==========================================================================
    // Work day hours
    // ==========================================================================

    #[test]
    fn test_day_shift_within_contract() {
        let hours =
            calculate_work_day_hours("08:00", "17:00", DailyType::Disposition10, dec("10"))
                .unwrap();

        assert_eq!(hours.duration, dec("9"));
        assert_eq!(hours.regular_hours, dec("10"));
        assert_eq!(hours.extra_hours, 0);
    }

    #[test]
    fn test_overnight_shift_wraps_past_midnight() {
        let hours =
            calculate_work_day_hours("22:00", "06:00", DailyType::Disposition12, dec("12"))
                .unwrap();

        assert_eq!(hours.duration, dec("8"));
        assert_eq!(hours.extra_hours, 0);
    }

    #[test]
    fn test_equal_times_yield_zero_duration() {
        let hours =
            calculate_work_day_hours("08:00", "08:00", DailyType::Disposition10, dec("10"))
                .unwrap();

        assert_eq!(hours.duration, Decimal::ZERO);
        assert_eq!(hours.extra_hours, 0);
    }

    #[test]
    fn test_long_day_accrues_overtime() {
        let hours =
            calculate_work_day_hours("06:00", "19:40", DailyType::Disposition12, dec("12"))
                .unwrap();

        // 13h40m worked, 1h40m excess rounds up to 2
        assert_eq!(hours.duration.round_dp(2), dec("13.67"));
        assert_eq!(hours.extra_hours, 2);
    }

    #[test]
    fn test_duration_is_not_rounded() {
        let hours =
            calculate_work_day_hours("08:00", "08:30", DailyType::Transfer, Decimal::ZERO)
                .unwrap();
        assert_eq!(hours.duration, dec("0.5"));
    }

    #[test]
    fn test_malformed_start_time_is_rejected() {
        let result = calculate_work_day_hours("8:00", "17:00", DailyType::Transfer, Decimal::ZERO);
        assert!(matches!(
            result,
            Err(crate::error::EngineError::InvalidTime { ref value }) if value == "8:00"
        ));
    }

    #[test]
    fn test_out_of_range_end_time_is_rejected() {
        let result =
            calculate_work_day_hours("08:00", "17:75", DailyType::Disposition10, dec("10"));
        assert!(result.is_err());
    }

    #[test]
    fn test_shift_minutes_wraparound() {
        let start = ClockTime::from_hm(23, 30).unwrap();
        let end = ClockTime::from_hm(0, 15).unwrap();
        assert_eq!(shift_minutes(start, end), 45);
        assert_eq!(shift_minutes(end, start), 23 * 60 + 15);
    }

    fn clock_time() -> impl Strategy<Value = ClockTime> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| ClockTime::from_hm(h, m).unwrap())
    }

    fn daily_type() -> impl Strategy<Value = DailyType> {
        prop_oneof![
            Just(DailyType::Transfer),
            Just(DailyType::Disposition10),
            Just(DailyType::Disposition12),
        ]
    }

    proptest! {
        #[test]
        fn prop_transfer_is_always_zero(minutes in 0i64..100_000, regular in 0u32..=24) {
            prop_assert_eq!(
                calculate_extra_hours(minutes, DailyType::Transfer, Decimal::from(regular)),
                0
            );
        }

        #[test]
        fn prop_no_overtime_within_regular_hours(regular in 0u32..=24, offset in 0i64..=1440) {
            let minutes = offset.min(i64::from(regular) * 60);
            prop_assert_eq!(
                calculate_extra_hours(minutes, DailyType::Disposition10, Decimal::from(regular)),
                0
            );
        }

        #[test]
        fn prop_duration_within_one_day(start in clock_time(), end in clock_time(), daily_type in daily_type()) {
            let hours = work_day_hours(start, end, daily_type, Decimal::from(10));
            prop_assert!(hours.duration >= Decimal::ZERO);
            prop_assert!(hours.duration < Decimal::from(24));
        }

        #[test]
        fn prop_calculation_is_idempotent(start in clock_time(), end in clock_time(), daily_type in daily_type(), regular in 0u32..=12) {
            let first = work_day_hours(start, end, daily_type, Decimal::from(regular));
            let second = work_day_hours(start, end, daily_type, Decimal::from(regular));
            prop_assert_eq!(first, second);
        }
    }
}
