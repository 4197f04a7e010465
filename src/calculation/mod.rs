//! Calculation logic for the consultant forecast engine.
//!
//! This module contains the calendar primitives, absence reconciliation,
//! monthly capacity, engagement revenue projection, salary tax, the monthly
//! aggregation that joins them, and the audited yearly projection run.

mod absence_reconciler;
mod calendar;
mod capacity;
mod input_checks;
mod money;
mod monthly;
mod projection;
mod revenue;
mod salary_tax;

pub use absence_reconciler::{MonthAbsences, reconcile_absences, reconcile_month_absences};
pub use calendar::{count_weekdays, days_inclusive, is_weekday, month_key, month_range, to_iso_date};
pub use capacity::{HOURS_PER_WORKDAY, MonthCapacity, calculate_capacity};
pub use input_checks::{
    inspect_absences, inspect_engagements, inspect_holidays, inspect_inputs, inspect_salaries,
};
pub use monthly::{
    MonthBreakdown, calculate_month_breakdowns, calculate_monthly_financials,
    calculate_monthly_stats, financials_from_stats, summarize_financials,
};
pub use projection::{ProjectionInput, run_projection};
pub use revenue::{EngagementRevenue, MonthRevenue, project_engagement, project_month_revenue};
pub use salary_tax::{
    MonthlySalary, NetIncome, SalaryCost, SalaryYearSummary, calculate_net_income,
    calculate_salary_cost, state_tax_rate, summarize_salary_year,
};
