//! Time edits and the extended-shift confirmation gate.
//!
//! Every start/end time edit on a work day goes through [`apply_time_edit`].
//! Because an end time before the start time is read as crossing midnight,
//! a typo can silently produce an implausibly long shift. When the new
//! duration reaches the configured threshold the edit is held back as a
//! [`PendingShift`] until a person confirms or rejects it.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ClockTime, WorkDay};

use super::work_day_hours;

/// Default duration, in hours, at which a shift needs confirmation.
pub const DEFAULT_EXTENDED_SHIFT_THRESHOLD: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The outcome of editing a work day's times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEdit {
    /// Both times present; hours recomputed and ready to store.
    Applied(WorkDay),
    /// One time still missing; times stored, hours left as they were.
    Incomplete(WorkDay),
    /// The new duration needs a person to confirm it before it is stored.
    NeedsConfirmation(PendingShift),
}

impl TimeEdit {
    /// Returns the work day to store, or `None` while confirmation is pending.
    pub fn work_day(&self) -> Option<&WorkDay> {
        match self {
            TimeEdit::Applied(day) | TimeEdit::Incomplete(day) => Some(day),
            TimeEdit::NeedsConfirmation(_) => None,
        }
    }
}

/// An edit held back for confirmation.
///
/// `previous` is the work day as it was before the edit; `proposed` carries
/// the new times and recomputed hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingShift {
    /// The stored work day before the edit.
    pub previous: WorkDay,
    /// The work day as the edit would leave it.
    pub proposed: WorkDay,
}

impl PendingShift {
    /// The day the pending edit belongs to.
    pub fn date(&self) -> NaiveDate {
        self.proposed.date
    }

    /// Text asking the user to confirm how the times were read.
    ///
    /// # Example
    ///
    /// ```
    /// use workday_engine::calculation::{TimeEdit, apply_time_edit};
    /// use workday_engine::models::{DailyType, WorkDay};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let day = WorkDay::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), DailyType::Disposition12, Decimal::from(12));
    /// let edit = apply_time_edit(&day, "20:00".parse().ok(), "18:00".parse().ok(), Decimal::from(20));
    ///
    /// let TimeEdit::NeedsConfirmation(pending) = edit else { panic!("expected a pending shift") };
    /// assert_eq!(
    ///     pending.prompt(),
    ///     "Shift on 2024-04-01 runs from 20:00 to 18:00 the next day (22 hours). Is this correct?"
    /// );
    /// ```
    pub fn prompt(&self) -> String {
        let (start, end) = self
            .proposed
            .times()
            .map(|(s, e)| (s.to_string(), e.to_string()))
            .unwrap_or_default();
        let next_day = match self.proposed.times() {
            Some((s, e)) if e <= s => " the next day",
            _ => "",
        };

        format!(
            "Shift on {} runs from {} to {}{} ({} hours). Is this correct?",
            self.proposed.date,
            start,
            end,
            next_day,
            self.proposed.duration.round_dp(2).normalize()
        )
    }

    /// Accepts the proposed values and marks the shift as confirmed.
    pub fn confirm(self) -> WorkDay {
        let mut day = self.proposed;
        day.confirmed_extended_shift = true;
        day
    }

    /// Discards the edit and returns the work day unchanged.
    pub fn reject(self) -> WorkDay {
        self.previous
    }
}

/// Applies new start/end times to a work day.
///
/// Hours are only recomputed when both times are present. A recomputed
/// duration at or above `threshold_hours` requires confirmation unless the
/// day was already confirmed as an extended shift. An edit that brings the
/// duration back under the threshold clears the confirmation.
///
/// # Arguments
///
/// * `day` - The work day as currently stored
/// * `start_time` - The start time after the edit
/// * `end_time` - The end time after the edit
/// * `threshold_hours` - Duration at which confirmation is required
///
/// # Examples
///
/// ```
/// use workday_engine::calculation::{DEFAULT_EXTENDED_SHIFT_THRESHOLD, TimeEdit, apply_time_edit};
/// use workday_engine::models::{DailyType, WorkDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = WorkDay::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), DailyType::Disposition10, Decimal::from(10));
///
/// let edit = apply_time_edit(&day, "07:00".parse().ok(), None, DEFAULT_EXTENDED_SHIFT_THRESHOLD);
/// assert!(matches!(edit, TimeEdit::Incomplete(_)));
///
/// let edit = apply_time_edit(&day, "07:00".parse().ok(), "18:30".parse().ok(), DEFAULT_EXTENDED_SHIFT_THRESHOLD);
/// let TimeEdit::Applied(updated) = edit else { panic!("expected an applied edit") };
/// assert_eq!(updated.extra_hours, 2);
/// ```
pub fn apply_time_edit(
    day: &WorkDay,
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    threshold_hours: Decimal,
) -> TimeEdit {
    let mut proposed = day.clone();
    proposed.start_time = start_time;
    proposed.end_time = end_time;

    let Some((start, end)) = proposed.times() else {
        return TimeEdit::Incomplete(proposed);
    };

    let hours = work_day_hours(start, end, day.daily_type, day.regular_hours);
    proposed.duration = hours.duration;
    proposed.extra_hours = hours.extra_hours;

    if proposed.duration < threshold_hours {
        proposed.confirmed_extended_shift = false;
        return TimeEdit::Applied(proposed);
    }

    if day.confirmed_extended_shift {
        TimeEdit::Applied(proposed)
    } else {
        TimeEdit::NeedsConfirmation(PendingShift {
            previous: day.clone(),
            proposed,
        })
    }
}
