//! Calendar utilities.
//!
//! Pure date-range arithmetic over [`NaiveDate`]: weekday detection, weekday
//! counting, month boundaries and the textual keys used for dates and months.
//! `NaiveDate` carries no time-of-day or offset, so every function here gives
//! the same answer in every timezone.

use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::error::{ForecastError, ForecastResult};

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::is_weekday;
/// use chrono::NaiveDate;
///
/// // 2026-01-01 is a Thursday, 2026-01-03 a Saturday
/// assert!(is_weekday(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// assert!(!is_weekday(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
/// ```
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Iterates over every date in `[start, end]`, inclusive.
///
/// Yields nothing when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Counts weekdays in `[start, end]` that are not in `excluded`.
///
/// Returns 0 when `start > end`.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::count_weekdays;
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(count_weekdays(start, end, &BTreeSet::new()), 22);
///
/// let excluded: BTreeSet<_> = [NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()].into();
/// assert_eq!(count_weekdays(start, end, &excluded), 21);
/// ```
pub fn count_weekdays(start: NaiveDate, end: NaiveDate, excluded: &BTreeSet<NaiveDate>) -> u32 {
    days_inclusive(start, end)
        .filter(|d| is_weekday(*d) && !excluded.contains(d))
        .count() as u32
}

/// Returns the first and last calendar day of a month.
///
/// `month_index` is zero-based (0 = January, 11 = December). The last day is
/// leap-year aware.
///
/// # Errors
///
/// Returns `InvalidMonth` when `month_index > 11` or the year lies outside the
/// representable calendar.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::month_range;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_range(2028, 1)?;
/// assert_eq!(first, NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
pub fn month_range(year: i32, month_index: u32) -> ForecastResult<(NaiveDate, NaiveDate)> {
    let invalid = || ForecastError::InvalidMonth { year, month_index };

    if month_index > 11 {
        return Err(invalid());
    }

    let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1).ok_or_else(invalid)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;

    Ok((first, last))
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::to_iso_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(to_iso_date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()), "2026-03-07");
/// ```
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a zero-based month index as a `YYYY-MM` key.
pub fn month_key(year: i32, month_index: u32) -> String {
    format!("{:04}-{:02}", year, month_index + 1)
}
