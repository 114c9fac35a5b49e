//! Booking lifecycle service.
//!
//! [`BookingService`] owns budgets and services over an injected
//! [`Repository`]. It is the single place where vehicle periods are created,
//! resized, or removed, and where work-day time edits are run through the
//! calculator and the extended-shift confirmation gate before being stored.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    PendingShift, TimeEdit, apply_time_edit, audit_work_day, calculate_total_hours,
    work_day_warnings,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, Booking, BookingKind, ClockTime, DailyType, PeriodSummary, VehiclePeriod, WorkDay,
};
use crate::repository::Repository;

/// Which end of a work day a time edit changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// The start of usage.
    Start,
    /// The end of usage.
    End,
}

/// Manages bookings and the work days inside them.
///
/// # Example
///
/// ```no_run
/// use workday_engine::config::ConfigLoader;
/// use workday_engine::models::{BookingKind, DailyType};
/// use workday_engine::repository::MemoryRepository;
/// use workday_engine::service::{BookingService, TimeField};
/// use chrono::NaiveDate;
///
/// let config = ConfigLoader::load("./config/default")?;
/// let service = BookingService::new(MemoryRepository::new(), config);
///
/// let booking = service.create_booking(BookingKind::Budget, "cust-42")?;
/// let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let period = service.add_vehicle_period(booking.id, "van-07", None, day, day, DailyType::Disposition10)?;
///
/// service.edit_work_day_time(booking.id, period.id, day, TimeField::Start, "08:00")?;
/// service.edit_work_day_time(booking.id, period.id, day, TimeField::End, "19:30")?;
///
/// let summary = service.summarize_period(booking.id, period.id)?;
/// assert_eq!(summary.totals.total_extra_hours, 2);
/// # Ok::<(), workday_engine::error::EngineError>(())
/// ```
pub struct BookingService<R> {
    repository: R,
    config: ConfigLoader,
}

impl<R: Repository<Booking>> BookingService<R> {
    /// Creates a service over a repository and a loaded configuration.
    pub fn new(repository: R, config: ConfigLoader) -> Self {
        Self { repository, config }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Creates and stores an empty booking.
    pub fn create_booking(
        &self,
        kind: BookingKind,
        customer_id: impl Into<String>,
    ) -> EngineResult<Booking> {
        let booking = Booking::new(kind, customer_id);
        self.repository.put(booking.clone())?;

        info!(
            booking_id = %booking.id,
            kind = ?booking.kind,
            customer_id = %booking.customer_id,
            "Created booking"
        );
        Ok(booking)
    }

    /// Gets a booking by ID.
    pub fn get_booking(&self, booking_id: Uuid) -> EngineResult<Booking> {
        self.repository
            .get(booking_id)?
            .ok_or(EngineError::BookingNotFound { id: booking_id })
    }

    /// Lists every stored booking.
    pub fn list_bookings(&self) -> EngineResult<Vec<Booking>> {
        self.repository.list_all()
    }

    /// Deletes a booking together with its periods and work days.
    pub fn delete_booking(&self, booking_id: Uuid) -> EngineResult<()> {
        if !self.repository.delete(booking_id)? {
            return Err(EngineError::BookingNotFound { id: booking_id });
        }
        info!(booking_id = %booking_id, "Deleted booking");
        Ok(())
    }

    /// Adds a vehicle period with one empty work day per date.
    ///
    /// Contracted hours come from the configuration for `daily_type`.
    pub fn add_vehicle_period(
        &self,
        booking_id: Uuid,
        vehicle_id: impl Into<String>,
        driver_id: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_type: DailyType,
    ) -> EngineResult<VehiclePeriod> {
        let mut booking = self.get_booking(booking_id)?;
        let regular_hours = self.config.regular_hours_for(daily_type)?;

        let period = VehiclePeriod::new(
            vehicle_id,
            driver_id,
            start_date,
            end_date,
            daily_type,
            regular_hours,
        )?;
        booking.periods.push(period.clone());
        self.repository.put(booking)?;

        info!(
            booking_id = %booking_id,
            period_id = %period.id,
            vehicle_id = %period.vehicle_id,
            days = period.work_days.len(),
            daily_type = %daily_type,
            "Added vehicle period"
        );
        Ok(period)
    }

    /// Removes a vehicle period and its work days.
    pub fn remove_vehicle_period(&self, booking_id: Uuid, period_id: Uuid) -> EngineResult<()> {
        let mut booking = self.get_booking(booking_id)?;
        booking.period(period_id)?;
        booking.periods.retain(|p| p.id != period_id);
        self.repository.put(booking)?;

        info!(booking_id = %booking_id, period_id = %period_id, "Removed vehicle period");
        Ok(())
    }

    /// Moves a vehicle period to a new date range.
    ///
    /// Work days still inside the range keep their times and hours.
    pub fn resize_vehicle_period(
        &self,
        booking_id: Uuid,
        period_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<VehiclePeriod> {
        let mut booking = self.get_booking(booking_id)?;
        let period = booking.period_mut(period_id)?;
        period.resize(start_date, end_date)?;
        let period = period.clone();
        self.repository.put(booking)?;

        debug!(
            booking_id = %booking_id,
            period_id = %period_id,
            start_date = %start_date,
            end_date = %end_date,
            "Resized vehicle period"
        );
        Ok(period)
    }

    /// Switches a vehicle period to another service type.
    pub fn change_service_type(
        &self,
        booking_id: Uuid,
        period_id: Uuid,
        daily_type: DailyType,
    ) -> EngineResult<VehiclePeriod> {
        let regular_hours = self.config.regular_hours_for(daily_type)?;
        let mut booking = self.get_booking(booking_id)?;
        let period = booking.period_mut(period_id)?;
        period.change_service_type(daily_type, regular_hours);
        let period = period.clone();
        self.repository.put(booking)?;

        debug!(
            booking_id = %booking_id,
            period_id = %period_id,
            daily_type = %daily_type,
            "Changed service type"
        );
        Ok(period)
    }

    /// Sets the start or end time of one work day.
    ///
    /// The value is parsed as `HH:MM`; malformed input is rejected with
    /// `InvalidTime` and nothing is stored. Applied and incomplete edits are
    /// stored immediately. An edit that needs confirmation leaves the stored
    /// work day untouched and is returned as
    /// [`TimeEdit::NeedsConfirmation`]; pass it to
    /// [`resolve_extended_shift`](Self::resolve_extended_shift).
    pub fn edit_work_day_time(
        &self,
        booking_id: Uuid,
        period_id: Uuid,
        date: NaiveDate,
        field: TimeField,
        value: &str,
    ) -> EngineResult<TimeEdit> {
        let time: ClockTime = value.parse().inspect_err(|_| {
            warn!(
                booking_id = %booking_id,
                period_id = %period_id,
                date = %date,
                value = %value,
                "Rejected malformed time"
            );
        })?;

        let mut booking = self.get_booking(booking_id)?;
        let period = booking.period_mut(period_id)?;
        let day = period
            .work_day_mut(date)
            .ok_or(EngineError::WorkDayNotFound { period_id, date })?;

        let (start, end) = match field {
            TimeField::Start => (Some(time), day.end_time),
            TimeField::End => (day.start_time, Some(time)),
        };
        let edit = apply_time_edit(day, start, end, self.config.extended_shift_threshold());

        match &edit {
            TimeEdit::Applied(updated) | TimeEdit::Incomplete(updated) => {
                *day = updated.clone();
                debug!(
                    booking_id = %booking_id,
                    period_id = %period_id,
                    date = %date,
                    duration = %updated.duration,
                    extra_hours = updated.extra_hours,
                    "Updated work day"
                );
                self.repository.put(booking)?;
            }
            TimeEdit::NeedsConfirmation(pending) => {
                info!(
                    booking_id = %booking_id,
                    period_id = %period_id,
                    date = %date,
                    duration = %pending.proposed.duration,
                    "Extended shift awaiting confirmation"
                );
            }
        }

        Ok(edit)
    }

    /// Stores the outcome of a pending extended shift.
    ///
    /// When `accept` is true the proposed values are stored with the shift
    /// marked as confirmed; otherwise the previous work day is kept.
    ///
    /// The stored work day must still equal `pending.previous`. If it was
    /// edited, resized into, or switched to another service type in the
    /// meantime, `StaleEdit` is returned and nothing is stored.
    pub fn resolve_extended_shift(
        &self,
        booking_id: Uuid,
        period_id: Uuid,
        pending: PendingShift,
        accept: bool,
    ) -> EngineResult<WorkDay> {
        let mut booking = self.get_booking(booking_id)?;
        let period = booking.period_mut(period_id)?;
        let date = pending.date();
        let day = period
            .work_day_mut(date)
            .ok_or(EngineError::WorkDayNotFound { period_id, date })?;

        if *day != pending.previous {
            warn!(
                booking_id = %booking_id,
                period_id = %period_id,
                date = %date,
                accepted = accept,
                "Discarded stale extended shift"
            );
            return Err(EngineError::StaleEdit { period_id, date });
        }

        let resolved = if accept {
            pending.confirm()
        } else {
            pending.reject()
        };
        *day = resolved.clone();
        self.repository.put(booking)?;

        info!(
            booking_id = %booking_id,
            period_id = %period_id,
            date = %date,
            accepted = accept,
            "Resolved extended shift"
        );
        Ok(resolved)
    }

    /// Computes billing figures and the audit trace for a vehicle period.
    ///
    /// Fails with `ServiceTypeNotConfigured` if the period's daily type has no
    /// configured label.
    pub fn summarize_period(&self, booking_id: Uuid, period_id: Uuid) -> EngineResult<PeriodSummary> {
        let start_time = Instant::now();
        let booking = self.get_booking(booking_id)?;
        let period = booking.period(period_id)?;

        let mut steps = Vec::new();
        let mut warnings = Vec::new();
        let mut total_duration = Decimal::ZERO;
        let mut step_number: u32 = 1;

        for day in &period.work_days {
            if let Some(step) = audit_work_day(day, step_number) {
                steps.push(step);
                step_number += 1;
                total_duration += day.duration;
            }
            warnings.extend(work_day_warnings(day));
        }

        let service_label = self.config.get_service_type(period.daily_type)?.label.clone();
        let totals = calculate_total_hours(&period.work_days);
        let duration = start_time.elapsed();

        debug!(
            booking_id = %booking_id,
            period_id = %period_id,
            total_regular_hours = %totals.total_regular_hours,
            total_extra_hours = totals.total_extra_hours,
            warnings = warnings.len(),
            duration_us = duration.as_micros(),
            "Summarized vehicle period"
        );

        Ok(PeriodSummary {
            booking_id,
            period_id,
            vehicle_id: period.vehicle_id.clone(),
            daily_type: period.daily_type,
            service_label,
            days: period.work_days.len(),
            complete_days: steps.len(),
            total_duration,
            totals,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            },
            generated_at: Utc::now(),
        })
    }
}
