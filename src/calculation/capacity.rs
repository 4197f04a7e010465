//! Monthly work capacity.
//!
//! Derives how many days and hours of a month are available for billing once
//! weekends, work-free holidays and effective absences are removed.

use chrono::NaiveDate;

use crate::models::HolidaySet;

use super::absence_reconciler::MonthAbsences;
use super::calendar::count_weekdays;

/// The length of a workday in hours.
pub const HOURS_PER_WORKDAY: u32 = 8;

/// Work capacity for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCapacity {
    /// Weekdays in the month that are not work-free holidays.
    pub total_work_days: u32,
    /// Weekdays lost to absence, holidays excluded.
    pub effective_absence_days: u32,
    /// Days left to work, never negative.
    pub workable_days: u32,
    /// `workable_days * HOURS_PER_WORKDAY`.
    pub workable_hours: u32,
}

/// Calculates the capacity of the month `[month_start, month_end]`.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::{calculate_capacity, MonthAbsences};
/// use consultant_forecast::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let capacity = calculate_capacity(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     &HolidaySet::new(),
///     &MonthAbsences::default(),
/// );
/// assert_eq!(capacity.total_work_days, 22);
/// assert_eq!(capacity.workable_hours, 176);
/// ```
pub fn calculate_capacity(
    month_start: NaiveDate,
    month_end: NaiveDate,
    holidays: &HolidaySet,
    absences: &MonthAbsences,
) -> MonthCapacity {
    let total_work_days = count_weekdays(month_start, month_end, holidays.dates());
    let effective_absence_days = absences.effective_count();
    let workable_days = total_work_days.saturating_sub(effective_absence_days);

    MonthCapacity {
        total_work_days,
        effective_absence_days,
        workable_days,
        workable_hours: workable_days * HOURS_PER_WORKDAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::reconcile_month_absences;
    use crate::models::{AbsenceCategory, AbsenceRecord};
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_holidays_reduce_total_work_days() {
        let holidays: HolidaySet = [date(2026, 1, 1), date(2026, 1, 6)].into_iter().collect();

        let capacity = calculate_capacity(
            date(2026, 1, 1),
            date(2026, 1, 31),
            &holidays,
            &MonthAbsences::default(),
        );

        assert_eq!(capacity.total_work_days, 20);
        assert_eq!(capacity.workable_days, 20);
        assert_eq!(capacity.workable_hours, 160);
    }

    #[test]
    fn test_absence_on_holiday_is_not_subtracted_twice() {
        let holidays: HolidaySet = [date(2026, 1, 6)].into_iter().collect();
        let absences = vec![AbsenceRecord {
            id: "abs".to_string(),
            start_date: date(2026, 1, 5),
            end_date: date(2026, 1, 9),
            category: AbsenceCategory::Vacation,
            note: None,
        }];
        let month = reconcile_month_absences(date(2026, 1, 1), date(2026, 1, 31), &absences, &holidays);

        let capacity = calculate_capacity(date(2026, 1, 1), date(2026, 1, 31), &holidays, &month);

        assert_eq!(capacity.total_work_days, 21);
        assert_eq!(capacity.effective_absence_days, 4);
        assert_eq!(capacity.workable_days, 17);
    }

    #[test]
    fn test_workable_days_never_negative() {
        // Effective days supplied from outside the month cannot push capacity below zero.
        let mut effective_days = BTreeSet::new();
        for day in 1..=28 {
            effective_days.insert(date(2026, 3, day));
        }
        let absences = MonthAbsences {
            ui_days: effective_days.clone(),
            effective_days,
        };

        let capacity = calculate_capacity(
            date(2026, 2, 1),
            date(2026, 2, 28),
            &HolidaySet::new(),
            &absences,
        );

        assert_eq!(capacity.total_work_days, 20);
        assert_eq!(capacity.workable_days, 0);
        assert_eq!(capacity.workable_hours, 0);
    }
}
