//! Audit trail for work days.
//!
//! This module explains, day by day, how a vehicle period's billing figures
//! were derived and flags days that need a second look.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, WorkDay};

/// Rule identifier recorded on work-day audit steps.
pub const WORK_DAY_RULE_ID: &str = "work_day_hours";

/// Warning code for a day with one or both times missing.
pub const WARNING_INCOMPLETE_DAY: &str = "INCOMPLETE_WORK_DAY";

/// Warning code for a day whose start and end times are equal.
pub const WARNING_ZERO_DURATION: &str = "ZERO_DURATION_AMBIGUOUS";

/// Warning code for a day billed as a confirmed extended shift.
pub const WARNING_EXTENDED_SHIFT: &str = "CONFIRMED_EXTENDED_SHIFT";

/// Builds the audit step for a day with both times entered.
///
/// Returns `None` for days that are still missing a time.
///
/// # Example
///
/// ```
/// use workday_engine::calculation::audit_work_day;
/// use workday_engine::models::{DailyType, WorkDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut day = WorkDay::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), DailyType::Disposition10, Decimal::from(10));
/// assert!(audit_work_day(&day, 1).is_none());
///
/// day.start_time = Some("08:00".parse().unwrap());
/// day.end_time = Some("17:00".parse().unwrap());
/// day.duration = Decimal::from(9);
/// let step = audit_work_day(&day, 1).unwrap();
/// assert_eq!(step.output["extra_hours"], 0);
/// ```
pub fn audit_work_day(day: &WorkDay, step_number: u32) -> Option<AuditStep> {
    let (start, end) = day.times()?;
    let duration = day.duration.round_dp(2).normalize();
    let regular = day.regular_hours.normalize();
    let crosses_midnight = end < start;

    let reasoning = if day.daily_type.is_transfer() {
        format!("{} hours worked on a transfer, overtime does not apply", duration)
    } else if day.extra_hours > 0 {
        format!(
            "{} hours worked exceeds {} hour contracted day, {} overtime hours billed",
            duration, regular, day.extra_hours
        )
    } else if day.duration > day.regular_hours {
        format!(
            "{} hours worked exceeds {} hour contracted day by less than the overtime tolerance",
            duration, regular
        )
    } else {
        format!(
            "{} hours worked is within the {} hour contracted day",
            duration, regular
        )
    };

    Some(AuditStep {
        step_number,
        rule_id: WORK_DAY_RULE_ID.to_string(),
        rule_name: "Work Day Hours".to_string(),
        date: day.date,
        input: serde_json::json!({
            "start_time": start.to_string(),
            "end_time": end.to_string(),
            "daily_type": day.daily_type.as_str(),
            "regular_hours": regular.to_string()
        }),
        output: serde_json::json!({
            "duration": duration.to_string(),
            "extra_hours": day.extra_hours,
            "crosses_midnight": crosses_midnight
        }),
        reasoning,
    })
}

/// Lists the warnings raised by a single day.
pub fn work_day_warnings(day: &WorkDay) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    match day.times() {
        None => warnings.push(AuditWarning {
            code: WARNING_INCOMPLETE_DAY.to_string(),
            date: day.date,
            message: format!("{} is missing a start or end time", day.date),
            severity: "medium".to_string(),
        }),
        Some((start, end)) if start == end && day.duration == Decimal::ZERO => {
            warnings.push(AuditWarning {
                code: WARNING_ZERO_DURATION.to_string(),
                date: day.date,
                message: format!(
                    "{} starts and ends at {}; billed as zero hours, not a full day",
                    day.date, start
                ),
                severity: "high".to_string(),
            })
        }
        Some(_) => {}
    }

    if day.confirmed_extended_shift {
        warnings.push(AuditWarning {
            code: WARNING_EXTENDED_SHIFT.to_string(),
            date: day.date,
            message: format!(
                "{} was confirmed as an extended shift of {} hours",
                day.date,
                day.duration.round_dp(2).normalize()
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
