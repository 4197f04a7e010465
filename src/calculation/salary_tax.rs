//! Salary cost and net income calculation.
//!
//! This is a planning estimate, not payroll. State tax applies the annual
//! threshold month by month (`threshold / 12`) with no year-to-date true-up,
//! so a year with uneven salaries is taxed differently here than on the
//! final annual assessment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ForecastResult;
use crate::models::{SalarySchedule, TaxYearSettings};

use super::calendar::month_key;
use super::money;

/// The marginal state tax rate applied above the monthly threshold.
pub fn state_tax_rate() -> Decimal {
    Decimal::new(20, 2)
}

/// The business's cost for a gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCost {
    /// The gross salary the cost was derived from.
    pub gross_salary: Decimal,
    /// Employer social contributions on top of gross.
    pub employer_tax: Decimal,
    /// `gross_salary + employer_tax`.
    pub total_cost: Decimal,
}

/// The employee's take-home pay for a gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetIncome {
    /// The gross salary the net was derived from.
    pub gross_salary: Decimal,
    /// Flat municipal income tax.
    pub municipality_tax: Decimal,
    /// State tax on the part of gross above the monthly threshold.
    pub state_tax: Decimal,
    /// `municipality_tax + state_tax`.
    pub total_tax: Decimal,
    /// `gross_salary - total_tax`.
    pub net_salary: Decimal,
}

/// Salary figures for one month of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalary {
    /// The month key, `YYYY-MM`.
    pub month: String,
    /// The business's cost.
    pub cost: SalaryCost,
    /// The employee's take-home pay.
    pub net: NetIncome,
}

/// Salary figures for a whole year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryYearSummary {
    /// The calendar year.
    pub year: i32,
    /// One row per month, January through December.
    pub months: Vec<MonthlySalary>,
    /// Sum of gross salary.
    pub total_gross: Decimal,
    /// Sum of the business's cost.
    pub total_cost: Decimal,
    /// Sum of take-home pay.
    pub total_net: Decimal,
}

/// Calculates the business's cost of paying `gross_salary`.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::calculate_salary_cost;
/// use consultant_forecast::models::TaxYearSettings;
/// use rust_decimal::Decimal;
///
/// let settings = TaxYearSettings {
///     year: 2026,
///     state_tax_threshold_annual: Decimal::new(643_000, 0),
///     municipality_tax_percent: Decimal::new(30, 0),
///     employer_tax_percent: Decimal::new(3142, 2),
/// };
///
/// let cost = calculate_salary_cost(Decimal::new(50_000, 0), &settings)?;
/// assert_eq!(cost.total_cost, Decimal::new(65_710, 0));
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
pub fn calculate_salary_cost(
    gross_salary: Decimal,
    settings: &TaxYearSettings,
) -> ForecastResult<SalaryCost> {
    let employer_tax =
        money::percent_of(gross_salary, settings.employer_tax_percent, "employer tax")?;

    Ok(SalaryCost {
        gross_salary,
        employer_tax,
        total_cost: money::add(gross_salary, employer_tax, "total salary cost")?,
    })
}

/// Calculates the employee's take-home pay for `gross_salary`.
///
/// Municipal tax is a flat rate on all of gross. State tax is
/// [`state_tax_rate`] on whatever exceeds the monthly threshold.
pub fn calculate_net_income(
    gross_salary: Decimal,
    settings: &TaxYearSettings,
) -> ForecastResult<NetIncome> {
    let municipality_tax = money::percent_of(
        gross_salary,
        settings.municipality_tax_percent,
        "municipality tax",
    )?;

    let monthly_threshold = settings.monthly_state_tax_threshold();
    let state_tax = if gross_salary > monthly_threshold {
        let above = money::sub(gross_salary, monthly_threshold, "state tax")?;
        money::mul(above, state_tax_rate(), "state tax")?
    } else {
        Decimal::ZERO
    };

    let total_tax = money::add(municipality_tax, state_tax, "total tax")?;

    Ok(NetIncome {
        gross_salary,
        municipality_tax,
        state_tax,
        total_tax,
        net_salary: money::sub(gross_salary, total_tax, "net salary")?,
    })
}

/// Summarizes cost and net pay for every month of `year` in `schedule`.
///
/// Months with no recorded salary contribute zero.
pub fn summarize_salary_year(
    year: i32,
    schedule: &SalarySchedule,
    settings: &TaxYearSettings,
) -> ForecastResult<SalaryYearSummary> {
    let months = (0..12)
        .map(|month_index| {
            let month = month_key(year, month_index);
            let gross = schedule.gross_for(&month);
            Ok(MonthlySalary {
                cost: calculate_salary_cost(gross, settings)?,
                net: calculate_net_income(gross, settings)?,
                month,
            })
        })
        .collect::<ForecastResult<Vec<MonthlySalary>>>()?;

    Ok(SalaryYearSummary {
        year,
        total_gross: money::sum(months.iter().map(|m| m.cost.gross_salary), "yearly gross")?,
        total_cost: money::sum(months.iter().map(|m| m.cost.total_cost), "yearly cost")?,
        total_net: money::sum(months.iter().map(|m| m.net.net_salary), "yearly net")?,
        months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings_2026() -> TaxYearSettings {
        TaxYearSettings {
            year: 2026,
            state_tax_threshold_annual: dec("643000"),
            municipality_tax_percent: dec("30"),
            employer_tax_percent: dec("31.42"),
        }
    }

    #[test]
    fn test_salary_cost_adds_employer_tax() {
        let cost = calculate_salary_cost(dec("50000"), &settings_2026()).unwrap();

        assert_eq!(cost.employer_tax, dec("15710"));
        assert_eq!(cost.total_cost, dec("65710"));
        assert_eq!(cost.total_cost, dec("50000") * dec("1.3142"));
    }

    #[test]
    fn test_net_income_above_threshold() {
        let net = calculate_net_income(dec("60000"), &settings_2026()).unwrap();

        assert_eq!(net.municipality_tax, dec("18000"));
        assert_eq!(net.state_tax.round_dp(2), dec("1283.33"));
        assert_eq!(net.net_salary.round_dp(2), dec("40716.67"));
        assert_eq!(net.total_tax, net.municipality_tax + net.state_tax);
    }

    #[test]
    fn test_net_income_below_threshold_has_no_state_tax() {
        let net = calculate_net_income(dec("40000"), &settings_2026()).unwrap();

        assert_eq!(net.state_tax, Decimal::ZERO);
        assert_eq!(net.municipality_tax, dec("12000"));
        assert_eq!(net.net_salary, dec("28000"));
    }

    #[test]
    fn test_gross_exactly_at_threshold_has_no_state_tax() {
        let settings = TaxYearSettings {
            state_tax_threshold_annual: dec("600000"),
            ..settings_2026()
        };

        let net = calculate_net_income(dec("50000"), &settings).unwrap();

        assert_eq!(net.state_tax, Decimal::ZERO);
    }

    #[test]
    fn test_zero_gross_is_all_zero() {
        let cost = calculate_salary_cost(Decimal::ZERO, &settings_2026()).unwrap();
        let net = calculate_net_income(Decimal::ZERO, &settings_2026()).unwrap();

        assert_eq!(cost.total_cost, Decimal::ZERO);
        assert_eq!(net.total_tax, Decimal::ZERO);
        assert_eq!(net.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_gross_is_calculation_error() {
        let settings = settings_2026();

        for result in [
            calculate_salary_cost(Decimal::MAX, &settings).map(|c| c.total_cost),
            calculate_net_income(Decimal::MAX, &settings).map(|n| n.net_salary),
        ] {
            match result {
                Err(ForecastError::CalculationError { message }) => {
                    assert!(message.contains("overflow"));
                }
                other => panic!("Expected CalculationError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_summarize_salary_year_zero_fills_missing_months() {
        let mut schedule = SalarySchedule::new();
        schedule.set("2026-01", dec("50000")).unwrap();
        schedule.set("2026-02", dec("50000")).unwrap();
        schedule.set("2025-12", dec("99999")).unwrap();

        let summary = summarize_salary_year(2026, &schedule, &settings_2026()).unwrap();

        assert_eq!(summary.months.len(), 12);
        assert_eq!(summary.months[0].month, "2026-01");
        assert_eq!(summary.months[11].month, "2026-12");
        assert_eq!(summary.months[5].cost.total_cost, Decimal::ZERO);
        assert_eq!(summary.total_gross, dec("100000"));
        assert_eq!(summary.total_cost, dec("131420"));
        assert_eq!(summary.total_net, dec("70000"));
    }
}
