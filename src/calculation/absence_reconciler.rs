//! Absence reconciliation.
//!
//! Absence records may overlap or repeat the same days. This module clips
//! every record to a month and collapses the result into two deduplicated
//! day sets:
//!
//! - the **UI set**: every weekday covered by any absence, shown to the user
//!   as days off;
//! - the **effective set**: the UI set minus work-free holidays, i.e. the days
//!   that actually reduce capacity.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ForecastResult;
use crate::models::{AbsenceRecord, HolidaySet};

use super::calendar::{days_inclusive, is_weekday, month_key, month_range};

/// Deduplicated absence days for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthAbsences {
    /// Every absent weekday, including work-free holidays.
    pub ui_days: BTreeSet<NaiveDate>,
    /// Absent weekdays that are not work-free holidays.
    pub effective_days: BTreeSet<NaiveDate>,
}

impl MonthAbsences {
    /// The user-facing count of days off.
    pub fn ui_count(&self) -> u32 {
        self.ui_days.len() as u32
    }

    /// The count of days that reduce capacity.
    pub fn effective_count(&self) -> u32 {
        self.effective_days.len() as u32
    }
}

/// Reconciles all absences against the month `[month_start, month_end]`.
///
/// Records that do not overlap the month, including inverted records whose
/// start is after their end, contribute nothing.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::reconcile_month_absences;
/// use consultant_forecast::models::{AbsenceCategory, AbsenceRecord, HolidaySet};
/// use chrono::NaiveDate;
///
/// let absence = AbsenceRecord {
///     id: "abs_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     category: AbsenceCategory::Vacation,
///     note: None,
/// };
///
/// let month = reconcile_month_absences(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     &[absence],
///     &HolidaySet::new(),
/// );
/// assert_eq!(month.ui_count(), 3);
/// assert_eq!(month.effective_count(), 3);
/// ```
pub fn reconcile_month_absences(
    month_start: NaiveDate,
    month_end: NaiveDate,
    absences: &[AbsenceRecord],
    holidays: &HolidaySet,
) -> MonthAbsences {
    let mut result = MonthAbsences::default();

    for absence in absences {
        let overlap_start = absence.start_date.max(month_start);
        let overlap_end = absence.end_date.min(month_end);
        if overlap_start > overlap_end {
            continue;
        }

        for day in days_inclusive(overlap_start, overlap_end).filter(|d| is_weekday(*d)) {
            result.ui_days.insert(day);
            if !holidays.contains(day) {
                result.effective_days.insert(day);
            }
        }
    }

    result
}

/// Reconciles all absences for each of the twelve months of `year`.
///
/// The returned vector is ordered January through December.
pub fn reconcile_absences(
    year: i32,
    absences: &[AbsenceRecord],
    holidays: &HolidaySet,
) -> ForecastResult<Vec<MonthAbsences>> {
    (0..12)
        .map(|month_index| {
            let (month_start, month_end) = month_range(year, month_index)?;
            let month = reconcile_month_absences(month_start, month_end, absences, holidays);
            debug!(
                month = %month_key(year, month_index),
                ui_days = month.ui_count(),
                effective_days = month.effective_count(),
                "Reconciled absences"
            );
            Ok(month)
        })
        .collect()
}
