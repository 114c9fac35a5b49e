//! Calendar day ranges.

use chrono::NaiveDate;

/// Returns every date from `start_date` to `end_date` inclusive, ascending.
///
/// Returns an empty vector when `end_date` precedes `start_date`.
///
/// # Example
///
/// ```
/// use workday_engine::calculation::get_days_in_range;
/// use chrono::NaiveDate;
///
/// let days = get_days_in_range(
///     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
/// );
/// let days: Vec<String> = days.iter().map(|d| d.to_string()).collect();
/// assert_eq!(days, ["2024-04-01", "2024-04-02", "2024-04-03"]);
/// ```
pub fn get_days_in_range(start_date: NaiveDate, end_date: NaiveDate) -> Vec<NaiveDate> {
    start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .collect()
}
