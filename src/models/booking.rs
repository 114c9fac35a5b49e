//! Booking and vehicle period models.
//!
//! A [`Booking`] is either a budget (quote) or a service (job). Each booking
//! holds [`VehiclePeriod`] entries: a vehicle, optionally a driver, and an
//! inclusive date range with one [`WorkDay`] per calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{get_days_in_range, work_day_hours};
use crate::error::{EngineError, EngineResult};

use super::{DailyType, WorkDay};

/// Whether a booking is a quote or a confirmed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    /// A quote sent to the customer.
    Budget,
    /// A confirmed job.
    Service,
}

/// A vehicle (and optional driver) booked over an inclusive date range.
///
/// # Example
///
/// ```
/// use workday_engine::models::{DailyType, VehiclePeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = VehiclePeriod::new(
///     "van-07",
///     None,
///     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
///     DailyType::Disposition10,
///     Decimal::from(10),
/// )
/// .unwrap();
/// assert_eq!(period.work_days.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehiclePeriod {
    /// Unique identifier for the period entry.
    pub id: Uuid,
    /// The booked vehicle.
    pub vehicle_id: String,
    /// The assigned driver, if any.
    #[serde(default)]
    pub driver_id: Option<String>,
    /// First day of usage (inclusive).
    pub start_date: NaiveDate,
    /// Last day of usage (inclusive).
    pub end_date: NaiveDate,
    /// Service type applied to every day.
    pub daily_type: DailyType,
    /// Contracted hours per day.
    pub regular_hours: Decimal,
    /// One entry per day of the range, ascending.
    pub work_days: Vec<WorkDay>,
}

impl VehiclePeriod {
    /// Creates a period with an empty work day for every date in the range.
    ///
    /// Returns `InvalidDateRange` if `end_date` precedes `start_date`.
    pub fn new(
        vehicle_id: impl Into<String>,
        driver_id: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_type: DailyType,
        regular_hours: Decimal,
    ) -> EngineResult<Self> {
        check_range(start_date, end_date)?;

        let work_days = get_days_in_range(start_date, end_date)
            .into_iter()
            .map(|date| WorkDay::new(date, daily_type, regular_hours))
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            vehicle_id: vehicle_id.into(),
            driver_id,
            start_date,
            end_date,
            daily_type,
            regular_hours,
            work_days,
        })
    }

    /// Moves the period to a new date range.
    ///
    /// Days that remain inside the range keep their entered times and hours,
    /// newly covered days start empty, and days outside the range are dropped.
    pub fn resize(&mut self, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<()> {
        check_range(start_date, end_date)?;

        let mut existing = std::mem::take(&mut self.work_days).into_iter().peekable();
        let mut work_days = Vec::new();

        for date in get_days_in_range(start_date, end_date) {
            while existing.next_if(|day| day.date < date).is_some() {}
            match existing.next_if(|day| day.date == date) {
                Some(day) => work_days.push(day),
                None => work_days.push(WorkDay::new(date, self.daily_type, self.regular_hours)),
            }
        }

        self.start_date = start_date;
        self.end_date = end_date;
        self.work_days = work_days;
        Ok(())
    }

    /// Switches every day of the period to a new service type.
    ///
    /// Durations are unaffected; extra hours of days with both times entered
    /// are recomputed against the new threshold.
    pub fn change_service_type(&mut self, daily_type: DailyType, regular_hours: Decimal) {
        self.daily_type = daily_type;
        self.regular_hours = regular_hours;

        for day in &mut self.work_days {
            day.daily_type = daily_type;
            day.regular_hours = regular_hours;
            if let Some((start, end)) = day.times() {
                day.extra_hours = work_day_hours(start, end, daily_type, regular_hours).extra_hours;
            }
        }
    }

    /// Returns the work day for a date, if it falls inside the period.
    pub fn work_day(&self, date: NaiveDate) -> Option<&WorkDay> {
        self.work_days.iter().find(|day| day.date == date)
    }

    /// Returns a mutable reference to the work day for a date.
    pub fn work_day_mut(&mut self, date: NaiveDate) -> Option<&mut WorkDay> {
        self.work_days.iter_mut().find(|day| day.date == date)
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// A budget or service for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: Uuid,
    /// Budget or service.
    pub kind: BookingKind,
    /// The customer the booking is for.
    pub customer_id: String,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// Vehicle period entries, in insertion order.
    #[serde(default)]
    pub periods: Vec<VehiclePeriod>,
}

impl Booking {
    /// Creates an empty booking.
    pub fn new(kind: BookingKind, customer_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            customer_id: customer_id.into(),
            created_at: Utc::now(),
            periods: Vec::new(),
        }
    }

    /// Looks up a vehicle period by ID.
    pub fn period(&self, period_id: Uuid) -> EngineResult<&VehiclePeriod> {
        self.periods
            .iter()
            .find(|p| p.id == period_id)
            .ok_or(EngineError::PeriodNotFound {
                booking_id: self.id,
                period_id,
            })
    }

    /// Looks up a vehicle period by ID for modification.
    pub fn period_mut(&mut self, period_id: Uuid) -> EngineResult<&mut VehiclePeriod> {
        let booking_id = self.id;
        self.periods
            .iter_mut()
            .find(|p| p.id == period_id)
            .ok_or(EngineError::PeriodNotFound {
                booking_id,
                period_id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_period(start: &str, end: &str) -> VehiclePeriod {
        VehiclePeriod::new(
            "van-07",
            Some("drv-01".to_string()),
            make_date(start),
            make_date(end),
            DailyType::Disposition10,
            Decimal::from(10),
        )
        .unwrap()
    }

    fn dates(period: &VehiclePeriod) -> Vec<String> {
        period
            .work_days
            .iter()
            .map(|d| d.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    #[test]
    fn test_new_period_materializes_one_day_per_date() {
        let period = make_period("2024-04-01", "2024-04-03");

        assert_eq!(dates(&period), vec!["2024-04-01", "2024-04-02", "2024-04-03"]);
        assert!(period.work_days.iter().all(|d| !d.has_times()));
        assert!(
            period
                .work_days
                .iter()
                .all(|d| d.daily_type == DailyType::Disposition10
                    && d.regular_hours == Decimal::from(10))
        );
    }

    #[test]
    fn test_single_day_period() {
        let period = make_period("2024-04-01", "2024-04-01");
        assert_eq!(period.work_days.len(), 1);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = VehiclePeriod::new(
            "van-07",
            None,
            make_date("2024-04-03"),
            make_date("2024-04-01"),
            DailyType::Transfer,
            Decimal::ZERO,
        );
        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_resize_keeps_days_still_in_range() {
        let mut period = make_period("2024-04-01", "2024-04-03");
        {
            let day = period.work_day_mut(make_date("2024-04-02")).unwrap();
            day.start_time = Some("08:00".parse().unwrap());
            day.end_time = Some("20:00".parse().unwrap());
            day.duration = Decimal::from(12);
            day.extra_hours = 2;
        }

        period
            .resize(make_date("2024-04-02"), make_date("2024-04-05"))
            .unwrap();

        assert_eq!(
            dates(&period),
            vec!["2024-04-02", "2024-04-03", "2024-04-04", "2024-04-05"]
        );
        let kept = period.work_day(make_date("2024-04-02")).unwrap();
        assert_eq!(kept.duration, Decimal::from(12));
        assert_eq!(kept.extra_hours, 2);
        assert!(!period.work_day(make_date("2024-04-05")).unwrap().has_times());
        assert!(period.work_day(make_date("2024-04-01")).is_none());
    }

    #[test]
    fn test_resize_to_disjoint_range_replaces_all_days() {
        let mut period = make_period("2024-04-01", "2024-04-02");
        period
            .resize(make_date("2024-05-10"), make_date("2024-05-11"))
            .unwrap();

        assert_eq!(dates(&period), vec!["2024-05-10", "2024-05-11"]);
        assert_eq!(period.start_date, make_date("2024-05-10"));
        assert_eq!(period.end_date, make_date("2024-05-11"));
    }

    #[test]
    fn test_resize_rejects_reversed_range_without_changes() {
        let mut period = make_period("2024-04-01", "2024-04-02");
        let before = period.clone();

        let result = period.resize(make_date("2024-04-09"), make_date("2024-04-01"));

        assert!(result.is_err());
        assert_eq!(period, before);
    }

    #[test]
    fn test_change_service_type_recomputes_extra_hours() {
        let mut period = make_period("2024-04-01", "2024-04-01");
        {
            let day = &mut period.work_days[0];
            day.start_time = Some("06:00".parse().unwrap());
            day.end_time = Some("20:00".parse().unwrap());
            day.duration = Decimal::from(14);
            day.extra_hours = 4;
        }

        period.change_service_type(DailyType::Disposition12, Decimal::from(12));
        assert_eq!(period.work_days[0].extra_hours, 2);
        assert_eq!(period.work_days[0].duration, Decimal::from(14));

        period.change_service_type(DailyType::Transfer, Decimal::ZERO);
        assert_eq!(period.work_days[0].extra_hours, 0);
        assert_eq!(period.work_days[0].daily_type, DailyType::Transfer);
    }

    #[test]
    fn test_booking_period_lookup() {
        let mut booking = Booking::new(BookingKind::Budget, "cust-42");
        let period = make_period("2024-04-01", "2024-04-02");
        let period_id = period.id;
        booking.periods.push(period);

        assert!(booking.period(period_id).is_ok());
        assert!(booking.period_mut(period_id).is_ok());

        let missing = Uuid::new_v4();
        match booking.period(missing) {
            Err(EngineError::PeriodNotFound {
                booking_id,
                period_id,
            }) => {
                assert_eq!(booking_id, booking.id);
                assert_eq!(period_id, missing);
            }
            other => panic!("expected PeriodNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_booking_round_trips_through_json() {
        let mut booking = Booking::new(BookingKind::Service, "cust-42");
        booking.periods.push(make_period("2024-04-01", "2024-04-02"));

        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"kind\":\"service\""));
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }
}
