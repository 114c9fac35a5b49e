//! Hour totals across work days.

use crate::models::{HourTotals, WorkDay};

/// Sums regular and extra hours across a collection of work days.
///
/// Days without times contribute their contracted hours and zero overtime.
///
/// # Example
///
/// ```
/// use workday_engine::calculation::calculate_total_hours;
/// use rust_decimal::Decimal;
///
/// let totals = calculate_total_hours(&[]);
/// assert_eq!(totals.total_regular_hours, Decimal::ZERO);
/// assert_eq!(totals.total_extra_hours, 0);
/// ```
pub fn calculate_total_hours(work_days: &[WorkDay]) -> HourTotals {
    work_days
        .iter()
        .fold(HourTotals::default(), |mut totals, day| {
            totals.total_regular_hours += day.regular_hours;
            totals.total_extra_hours = totals.total_extra_hours.saturating_add(day.extra_hours);
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_day(day: u32, daily_type: DailyType, regular: i64, extra: u32) -> WorkDay {
        let mut work_day = WorkDay::new(
            NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            daily_type,
            Decimal::from(regular),
        );
        work_day.extra_hours = extra;
        work_day
    }

    #[test]
    fn test_empty_collection_is_zero() {
        assert_eq!(calculate_total_hours(&[]), HourTotals::default());
    }

    #[test]
    fn test_mixed_contracts() {
        let days = vec![
            make_day(1, DailyType::Disposition10, 10, 0),
            make_day(2, DailyType::Disposition12, 12, 2),
        ];

        let totals = calculate_total_hours(&days);

        assert_eq!(totals.total_regular_hours, Decimal::from(22));
        assert_eq!(totals.total_extra_hours, 2);
    }

    #[test]
    fn test_transfer_days_add_nothing() {
        let days = vec![
            make_day(1, DailyType::Transfer, 0, 0),
            make_day(2, DailyType::Transfer, 0, 0),
        ];

        assert_eq!(calculate_total_hours(&days), HourTotals::default());
    }
}
