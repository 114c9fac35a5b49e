//! Calculation logic for the work-day engine.
//!
//! This module contains the pure functions behind every billing figure:
//! work-day hours and overtime, calendar day ranges, hour totals, work day
//! validation, the extended-shift confirmation gate applied to time edits,
//! and the per-day audit trail.

mod day_range;
mod extended_shift;
mod period_audit;
mod totals;
mod validation;
mod work_day_hours;

pub use day_range::get_days_in_range;
pub use extended_shift::{
    DEFAULT_EXTENDED_SHIFT_THRESHOLD, PendingShift, TimeEdit, apply_time_edit,
};
pub use period_audit::{
    WARNING_EXTENDED_SHIFT, WARNING_INCOMPLETE_DAY, WARNING_ZERO_DURATION, WORK_DAY_RULE_ID,
    audit_work_day, work_day_warnings,
};
pub use totals::calculate_total_hours;
pub use validation::{validate_work_day, validate_work_day_times};
pub use work_day_hours::{
    OVERTIME_TOLERANCE_MINUTES, WorkDayHours, calculate_extra_hours, calculate_work_day_hours,
    shift_minutes, work_day_hours,
};
