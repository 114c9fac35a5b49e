//! Summary and audit models.
//!
//! This module contains the [`PeriodSummary`] type and its associated structures
//! that capture the billing figures of a vehicle period together with an audit
//! trace explaining how every day's hours were derived.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DailyType;

/// Aggregated hours across a collection of work days.
///
/// # Example
///
/// ```
/// use workday_engine::models::HourTotals;
/// use rust_decimal::Decimal;
///
/// let totals = HourTotals::default();
/// assert_eq!(totals.total_regular_hours, Decimal::ZERO);
/// assert_eq!(totals.total_extra_hours, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotals {
    /// Sum of the contracted hours of every day.
    pub total_regular_hours: Decimal,
    /// Sum of the overtime hours of every day.
    pub total_extra_hours: u32,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The day the step applies to.
    pub date: NaiveDate,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while summarizing a period.
///
/// Warnings flag days that need attention but do not block billing figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// The day the warning refers to.
    pub date: NaiveDate,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while summarizing.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Billing figures for one vehicle period.
///
/// Produced by
/// [`BookingService::summarize_period`](crate::service::BookingService::summarize_period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The booking the period belongs to.
    pub booking_id: Uuid,
    /// The summarized period.
    pub period_id: Uuid,
    /// The booked vehicle.
    pub vehicle_id: String,
    /// Service type of the period.
    pub daily_type: DailyType,
    /// Configured display name of the service type.
    pub service_label: String,
    /// Number of days in the period.
    pub days: usize,
    /// Number of days with both times entered.
    pub complete_days: usize,
    /// Total worked hours across complete days.
    pub total_duration: Decimal,
    /// Regular and extra hour totals across all days.
    pub totals: HourTotals,
    /// How the figures were derived.
    pub audit_trace: AuditTrace,
    /// When the summary was produced.
    pub generated_at: DateTime<Utc>,
}
