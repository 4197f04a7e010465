//! Yearly projection run.
//!
//! Combines input inspection, the monthly aggregation and salary cost into a
//! single [`ProjectionResult`] with an audit step per month.

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ForecastResult;
use crate::models::{
    AbsenceRecord, AuditStep, AuditTrace, Engagement, Holiday, HolidaySet, MonthlyFinancials,
    ProjectionResult, SalarySchedule, TaxYearSettings, bridge_days,
};

use super::input_checks::inspect_inputs;
use super::monthly::{
    MonthBreakdown, calculate_month_breakdowns, financials_from_stats, summarize_financials,
};

/// The raw records for one projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// The calendar year to project.
    pub year: i32,
    /// Client engagements.
    #[serde(default)]
    pub engagements: Vec<Engagement>,
    /// Registered absences.
    #[serde(default)]
    pub absences: Vec<AbsenceRecord>,
    /// The holiday calendar for the year.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Recorded gross salary per month.
    #[serde(default)]
    pub salaries: SalarySchedule,
}

fn month_audit_step(
    step_number: u32,
    breakdown: &MonthBreakdown,
    financials: &MonthlyFinancials,
) -> AuditStep {
    let stats = &breakdown.stats;

    AuditStep {
        step_number,
        rule_id: "month_projection".to_string(),
        rule_name: "Month Projection".to_string(),
        input: serde_json::json!({
            "month": stats.month,
            "total_work_days": stats.total_work_days,
            "absence_days_ui": stats.absence_days_ui,
            "effective_absence_days": stats.effective_absence_days,
        }),
        output: serde_json::json!({
            "workable_days": stats.workable_days,
            "workable_hours": stats.workable_hours,
            "revenue_lines": breakdown.revenue.lines,
            "revenue": financials.revenue.to_string(),
            "salary_cost": financials.salary_cost.to_string(),
            "profit": financials.profit.to_string(),
        }),
        reasoning: format!(
            "{}: {} of {} workdays available after {} absence days; {} engagement(s) earn {}, salary costs {}, profit {}",
            stats.month,
            stats.workable_days,
            stats.total_work_days,
            stats.effective_absence_days,
            breakdown.revenue.lines.len(),
            financials.revenue,
            financials.salary_cost,
            financials.profit
        ),
    }
}

/// Projects a full year from raw records.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::{run_projection, ProjectionInput};
/// use consultant_forecast::models::TaxYearSettings;
/// use rust_decimal::Decimal;
///
/// let settings = TaxYearSettings {
///     year: 2026,
///     state_tax_threshold_annual: Decimal::new(643_000, 0),
///     municipality_tax_percent: Decimal::new(30, 0),
///     employer_tax_percent: Decimal::new(3142, 2),
/// };
/// let input = ProjectionInput { year: 2026, ..Default::default() };
///
/// let result = run_projection(&input, &settings)?;
/// assert_eq!(result.financials.len(), 12);
/// assert_eq!(result.audit_trace.steps.len(), 12);
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
pub fn run_projection(
    input: &ProjectionInput,
    settings: &TaxYearSettings,
) -> ForecastResult<ProjectionResult> {
    let start_time = Instant::now();

    let warnings = inspect_inputs(
        input.year,
        &input.engagements,
        &input.absences,
        &input.holidays,
        &input.salaries,
    );

    let holidays = HolidaySet::from_holidays(&input.holidays);
    let breakdowns =
        calculate_month_breakdowns(input.year, &input.absences, &holidays, &input.engagements)?;
    let monthly_stats: Vec<_> = breakdowns.iter().map(|b| b.stats.clone()).collect();
    let financials = financials_from_stats(&monthly_stats, &input.salaries, settings)?;
    let totals = summarize_financials(&financials)?;

    let steps = breakdowns
        .iter()
        .zip(&financials)
        .enumerate()
        .map(|(i, (breakdown, row))| month_audit_step(i as u32 + 1, breakdown, row))
        .collect();

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        year = input.year,
        engagements = input.engagements.len(),
        absences = input.absences.len(),
        revenue = %totals.revenue,
        profit = %totals.profit,
        warnings = warnings.len(),
        duration_us,
        "Projection completed"
    );

    Ok(ProjectionResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year: input.year,
        monthly_stats,
        financials,
        totals,
        bridge_days: bridge_days(&input.holidays).into_iter().cloned().collect(),
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
