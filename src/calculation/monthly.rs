//! Monthly aggregation.
//!
//! Runs reconciliation, capacity and revenue for each month of a year and
//! joins the result with salary cost into the twelve-row series consumed by
//! presentation layers. Every function returns exactly twelve rows, January
//! through December, zero-filled where there is no data.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ForecastResult;
use crate::models::{
    AbsenceRecord, Engagement, FinancialTotals, HolidaySet, MonthlyFinancials, MonthlyStats,
    SalarySchedule, TaxYearSettings,
};

use super::absence_reconciler::reconcile_month_absences;
use super::calendar::{month_key, month_range};
use super::capacity::calculate_capacity;
use super::money;
use super::revenue::{MonthRevenue, project_month_revenue};
use super::salary_tax::calculate_salary_cost;

/// Everything derived for a single month, before it is flattened into
/// [`MonthlyStats`].
#[derive(Debug, Clone)]
pub struct MonthBreakdown {
    /// The capacity and revenue figures.
    pub stats: MonthlyStats,
    /// Per-engagement revenue lines.
    pub revenue: MonthRevenue,
}

/// Derives the full breakdown for each month of `year`.
pub fn calculate_month_breakdowns(
    year: i32,
    absences: &[AbsenceRecord],
    holidays: &HolidaySet,
    engagements: &[Engagement],
) -> ForecastResult<Vec<MonthBreakdown>> {
    (0..12)
        .map(|month_index| {
            let (month_start, month_end) = month_range(year, month_index)?;
            let month_absences =
                reconcile_month_absences(month_start, month_end, absences, holidays);
            let capacity = calculate_capacity(month_start, month_end, holidays, &month_absences);
            let revenue = project_month_revenue(
                engagements,
                month_start,
                month_end,
                holidays,
                &month_absences.effective_days,
            )?;

            let stats = MonthlyStats {
                month: month_key(year, month_index),
                total_work_days: capacity.total_work_days,
                absence_days_ui: month_absences.ui_count(),
                effective_absence_days: capacity.effective_absence_days,
                workable_days: capacity.workable_days,
                workable_hours: capacity.workable_hours,
                projected_revenue: revenue.net_revenue,
            };

            debug!(
                month = %stats.month,
                total_work_days = stats.total_work_days,
                workable_days = stats.workable_days,
                projected_revenue = %stats.projected_revenue,
                "Derived month"
            );

            Ok(MonthBreakdown { stats, revenue })
        })
        .collect()
}

/// Calculates capacity and projected revenue for each month of `year`.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::calculate_monthly_stats;
/// use consultant_forecast::models::HolidaySet;
///
/// let stats = calculate_monthly_stats(2026, &[], &HolidaySet::new(), &[])?;
/// assert_eq!(stats.len(), 12);
/// assert_eq!(stats[0].month, "2026-01");
/// assert_eq!(stats[0].total_work_days, 22);
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
pub fn calculate_monthly_stats(
    year: i32,
    absences: &[AbsenceRecord],
    holidays: &HolidaySet,
    engagements: &[Engagement],
) -> ForecastResult<Vec<MonthlyStats>> {
    Ok(calculate_month_breakdowns(year, absences, holidays, engagements)?
        .into_iter()
        .map(|b| b.stats)
        .collect())
}

/// Joins monthly stats with salary cost.
///
/// `salary_cost` for a month is the employer's total cost of that month's
/// recorded gross salary, zero if none is recorded.
pub fn financials_from_stats(
    stats: &[MonthlyStats],
    salaries: &SalarySchedule,
    settings: &TaxYearSettings,
) -> ForecastResult<Vec<MonthlyFinancials>> {
    stats
        .iter()
        .map(|s| {
            let salary_cost =
                calculate_salary_cost(salaries.gross_for(&s.month), settings)?.total_cost;
            Ok(MonthlyFinancials {
                month: s.month.clone(),
                revenue: s.projected_revenue,
                salary_cost,
                profit: money::sub(s.projected_revenue, salary_cost, "monthly profit")?,
            })
        })
        .collect()
}

/// Calculates revenue, salary cost and profit for each month of `year`.
///
/// Revenue is the same day-accurate projection as
/// [`calculate_monthly_stats`], so holidays and absences are honored.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::calculate_monthly_financials;
/// use consultant_forecast::models::{HolidaySet, SalarySchedule, TaxYearSettings};
/// use rust_decimal::Decimal;
///
/// let settings = TaxYearSettings {
///     year: 2026,
///     state_tax_threshold_annual: Decimal::new(643_000, 0),
///     municipality_tax_percent: Decimal::new(30, 0),
///     employer_tax_percent: Decimal::new(3142, 2),
/// };
/// let salaries = SalarySchedule::uniform(2026, Decimal::new(50_000, 0));
///
/// let rows = calculate_monthly_financials(&[], &salaries, &[], 2026, &HolidaySet::new(), &settings)?;
/// assert_eq!(rows.len(), 12);
/// assert_eq!(rows[11].month, "2026-12");
/// assert_eq!(rows[11].profit, Decimal::new(-65_710, 0));
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
pub fn calculate_monthly_financials(
    engagements: &[Engagement],
    salaries: &SalarySchedule,
    absences: &[AbsenceRecord],
    year: i32,
    holidays: &HolidaySet,
    settings: &TaxYearSettings,
) -> ForecastResult<Vec<MonthlyFinancials>> {
    let stats = calculate_monthly_stats(year, absences, holidays, engagements)?;
    financials_from_stats(&stats, salaries, settings)
}

/// Sums a financial series into full-year totals.
pub fn summarize_financials(rows: &[MonthlyFinancials]) -> ForecastResult<FinancialTotals> {
    rows.iter().try_fold(
        FinancialTotals {
            revenue: Decimal::ZERO,
            salary_cost: Decimal::ZERO,
            profit: Decimal::ZERO,
        },
        |acc, row| {
            Ok(FinancialTotals {
                revenue: money::add(acc.revenue, row.revenue, "yearly revenue")?,
                salary_cost: money::add(acc.salary_cost, row.salary_cost, "yearly salary cost")?,
                profit: money::add(acc.profit, row.profit, "yearly profit")?,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use crate::models::AbsenceCategory;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings_2026() -> TaxYearSettings {
        TaxYearSettings {
            year: 2026,
            state_tax_threshold_annual: dec("643000"),
            municipality_tax_percent: dec("30"),
            employer_tax_percent: dec("31.42"),
        }
    }

    fn full_year_engagement(broker_fee_percent: &str) -> Engagement {
        Engagement {
            id: "eng_001".to_string(),
            client_id: "client_001".to_string(),
            name: "Full year".to_string(),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 12, 31),
            hourly_rate: dec("1200"),
            allocation_percent: dec("100"),
            broker_fee_percent: dec(broker_fee_percent),
        }
    }

    #[test]
    fn test_empty_input_yields_twelve_zero_rows() {
        let rows = calculate_monthly_financials(
            &[],
            &SalarySchedule::new(),
            &[],
            2026,
            &HolidaySet::new(),
            &settings_2026(),
        )
        .unwrap();

        assert_eq!(rows.len(), 12);
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.month, format!("2026-{:02}", index + 1));
            assert_eq!(row.revenue, Decimal::ZERO);
            assert_eq!(row.salary_cost, Decimal::ZERO);
            assert_eq!(row.profit, Decimal::ZERO);
        }
    }

    #[test]
    fn test_january_revenue_full_year_engagement() {
        let stats = calculate_monthly_stats(
            2026,
            &[],
            &HolidaySet::new(),
            &[full_year_engagement("0")],
        )
        .unwrap();

        assert_eq!(stats[0].total_work_days, 22);
        assert_eq!(stats[0].workable_hours, 176);
        assert_eq!(stats[0].projected_revenue, dec("211200"));
    }

    #[test]
    fn test_january_revenue_with_broker_fee() {
        let rows = calculate_monthly_financials(
            &[full_year_engagement("17")],
            &SalarySchedule::new(),
            &[],
            2026,
            &HolidaySet::new(),
            &settings_2026(),
        )
        .unwrap();

        assert_eq!(rows[0].revenue, dec("175296"));
        assert_eq!(rows[0].profit, dec("175296"));
    }

    #[test]
    fn test_profit_subtracts_employer_cost() {
        let mut salaries = SalarySchedule::new();
        salaries.set("2026-01", dec("50000")).unwrap();

        let rows = calculate_monthly_financials(
            &[full_year_engagement("0")],
            &salaries,
            &[],
            2026,
            &HolidaySet::new(),
            &settings_2026(),
        )
        .unwrap();

        assert_eq!(rows[0].salary_cost, dec("65710"));
        assert_eq!(rows[0].profit, dec("145490"));
        assert_eq!(rows[1].salary_cost, Decimal::ZERO);
    }

    #[test]
    fn test_absence_reduces_capacity_and_revenue() {
        let absences = vec![AbsenceRecord {
            id: "abs_001".to_string(),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 1, 5),
            category: AbsenceCategory::Vacation,
            note: None,
        }];

        let stats = calculate_monthly_stats(
            2026,
            &absences,
            &HolidaySet::new(),
            &[full_year_engagement("0")],
        )
        .unwrap();

        assert_eq!(stats[0].absence_days_ui, 3);
        assert_eq!(stats[0].effective_absence_days, 3);
        assert_eq!(stats[0].workable_days, 19);
        assert_eq!(stats[0].projected_revenue, dec("182400"));
        assert_eq!(stats[1].absence_days_ui, 0);
    }

    #[test]
    fn test_holiday_inside_vacation() {
        let holidays: HolidaySet = [date(2026, 1, 1), date(2026, 1, 6)].into_iter().collect();
        let absences = vec![AbsenceRecord {
            id: "abs_001".to_string(),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 1, 9),
            category: AbsenceCategory::Vacation,
            note: None,
        }];

        let stats = calculate_monthly_stats(2026, &absences, &holidays, &[]).unwrap();

        // Weekdays Jan 1-9: 1, 2, 5, 6, 7, 8, 9; holidays on the 1st and 6th
        assert_eq!(stats[0].total_work_days, 20);
        assert_eq!(stats[0].absence_days_ui, 7);
        assert_eq!(stats[0].effective_absence_days, 5);
        assert_eq!(stats[0].workable_days, 15);
    }

    #[test]
    fn test_summarize_financials() {
        let rows = vec![
            MonthlyFinancials {
                month: "2026-01".to_string(),
                revenue: dec("100"),
                salary_cost: dec("60"),
                profit: dec("40"),
            },
            MonthlyFinancials {
                month: "2026-02".to_string(),
                revenue: dec("10"),
                salary_cost: dec("60"),
                profit: dec("-50"),
            },
        ];

        let totals = summarize_financials(&rows).unwrap();

        assert_eq!(totals.revenue, dec("110"));
        assert_eq!(totals.salary_cost, dec("120"));
        assert_eq!(totals.profit, dec("-10"));
    }

    #[test]
    fn test_salary_beyond_decimal_range_is_calculation_error() {
        let mut salaries = SalarySchedule::new();
        salaries.set("2026-03", Decimal::MAX).unwrap();

        let result = calculate_monthly_financials(
            &[],
            &salaries,
            &[],
            2026,
            &HolidaySet::new(),
            &settings_2026(),
        );

        assert!(matches!(
            result,
            Err(ForecastError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_summarize_financials_overflow() {
        let row = MonthlyFinancials {
            month: "2026-01".to_string(),
            revenue: Decimal::MAX,
            salary_cost: Decimal::ZERO,
            profit: Decimal::MAX,
        };

        let result = summarize_financials(&[row.clone(), row]);

        match result {
            Err(ForecastError::CalculationError { message }) => {
                assert!(message.contains("yearly revenue"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
