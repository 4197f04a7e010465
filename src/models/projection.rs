//! Projection result models.
//!
//! This module contains the derived monthly series ([`MonthlyStats`],
//! [`MonthlyFinancials`]) and the [`ProjectionResult`] envelope that carries
//! them together with totals and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Holiday;

/// Capacity and revenue figures for one calendar month.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::MonthlyStats;
/// use rust_decimal::Decimal;
///
/// let stats = MonthlyStats {
///     month: "2026-01".to_string(),
///     total_work_days: 22,
///     absence_days_ui: 3,
///     effective_absence_days: 3,
///     workable_days: 19,
///     workable_hours: 152,
///     projected_revenue: Decimal::new(182_400, 0),
/// };
/// assert!(stats.workable_days <= stats.total_work_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// The month key, `YYYY-MM`.
    pub month: String,
    /// Weekdays in the month that are not work-free holidays.
    pub total_work_days: u32,
    /// Distinct weekdays covered by any absence, holidays included.
    pub absence_days_ui: u32,
    /// Distinct weekdays covered by any absence that were not holidays.
    pub effective_absence_days: u32,
    /// `total_work_days - effective_absence_days`, floored at zero.
    pub workable_days: u32,
    /// `workable_days` times the workday length.
    pub workable_hours: u32,
    /// Net revenue across all engagements active in the month.
    pub projected_revenue: Decimal,
}

/// Revenue, salary cost and profit for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFinancials {
    /// The month key, `YYYY-MM`.
    pub month: String,
    /// Projected net revenue.
    pub revenue: Decimal,
    /// Employer's all-in salary cost.
    pub salary_cost: Decimal,
    /// `revenue - salary_cost`; may be negative.
    pub profit: Decimal,
}

/// Full-year sums of the monthly financials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTotals {
    /// Sum of monthly revenue.
    pub revenue: Decimal,
    /// Sum of monthly salary cost.
    pub salary_cost: Decimal,
    /// Sum of monthly profit.
    pub profit: Decimal,
}

/// A single step in the audit trace recording how a month was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A warning about suspicious input that was nonetheless processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of derivation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while inspecting the input.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a yearly projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Unique identifier for this projection.
    pub calculation_id: Uuid,
    /// When the projection was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed it.
    pub engine_version: String,
    /// The projected calendar year.
    pub year: i32,
    /// Capacity and revenue, January through December.
    pub monthly_stats: Vec<MonthlyStats>,
    /// Revenue, cost and profit, January through December.
    pub financials: Vec<MonthlyFinancials>,
    /// Full-year totals of `financials`.
    pub totals: FinancialTotals,
    /// Bridge days in the holiday calendar, sorted by date. They remain
    /// billable and are listed as candidates for planned leave.
    pub bridge_days: Vec<Holiday>,
    /// Audit trace of the projection.
    pub audit_trace: AuditTrace,
}
