//! Holiday calendar models.
//!
//! This module contains the [`Holiday`] entry supplied by an external holiday
//! source and the [`HolidaySet`] lookup the engine derives from it.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// An official public holiday.
    PublicHoliday,
    /// A working day squeezed between a holiday and a weekend.
    BridgeDay,
}

/// A dated calendar event for a year.
///
/// Only entries with `is_work_free` set remove a weekday from capacity.
/// Bridge days are informational.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::{Holiday, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 6, 19).unwrap(),
///     name: "Midsommarafton".to_string(),
///     kind: HolidayKind::PublicHoliday,
///     is_work_free: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the event.
    pub date: NaiveDate,
    /// Display name of the event.
    pub name: String,
    /// Whether this is a public holiday or a bridge day.
    pub kind: HolidayKind,
    /// Whether the day is free from work.
    pub is_work_free: bool,
}

/// The set of work-free dates for a year.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::{Holiday, HolidayKind, HolidaySet};
/// use chrono::NaiveDate;
///
/// let holidays = vec![
///     Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
///         name: "Trettondedag jul".to_string(),
///         kind: HolidayKind::PublicHoliday,
///         is_work_free: true,
///     },
///     Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///         name: "Klämdag".to_string(),
///         kind: HolidayKind::BridgeDay,
///         is_work_free: false,
///     },
/// ];
///
/// let set = HolidaySet::from_holidays(&holidays);
/// assert!(set.contains(NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()));
/// assert!(!set.contains(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a holiday list, keeping only work-free entries.
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        holidays
            .iter()
            .filter(|h| h.is_work_free)
            .map(|h| h.date)
            .collect()
    }

    /// Returns true if `date` is work-free.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the underlying dates.
    pub fn dates(&self) -> &BTreeSet<NaiveDate> {
        &self.dates
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Returns the bridge days in `holidays`, sorted by date.
pub fn bridge_days(holidays: &[Holiday]) -> Vec<&Holiday> {
    let mut days: Vec<&Holiday> = holidays
        .iter()
        .filter(|h| h.kind == HolidayKind::BridgeDay)
        .collect();
    days.sort_by_key(|h| h.date);
    days
}
