//! Core data models for the work-day engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod clock_time;
mod daily_type;
mod summary;
mod work_day;

pub use booking::{Booking, BookingKind, VehiclePeriod};
pub use clock_time::{ClockTime, MINUTES_PER_DAY};
pub use daily_type::DailyType;
pub use summary::{AuditStep, AuditTrace, AuditWarning, HourTotals, PeriodSummary};
pub use work_day::WorkDay;
