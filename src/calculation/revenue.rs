//! Engagement revenue projection.
//!
//! Intersects each engagement with a month and walks the overlapping days,
//! billing every weekday that is neither a work-free holiday nor an effective
//! absence. Partial-month engagements are prorated by the days they cover.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ForecastResult;
use crate::models::{Engagement, HolidaySet};

use super::calendar::{days_inclusive, is_weekday};
use super::capacity::HOURS_PER_WORKDAY;
use super::money;

/// Revenue breakdown for one engagement in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementRevenue {
    /// The engagement this line belongs to.
    pub engagement_id: String,
    /// Billable workdays inside the engagement's overlap with the month.
    pub work_days: u32,
    /// `work_days * HOURS_PER_WORKDAY`.
    pub hours: Decimal,
    /// `hours` scaled by the allocation percentage.
    pub billable_hours: Decimal,
    /// `billable_hours * hourly_rate`.
    pub gross_revenue: Decimal,
    /// The share of gross revenue kept by the broker.
    pub broker_fee: Decimal,
    /// `gross_revenue - broker_fee`.
    pub net_revenue: Decimal,
}

/// Projected revenue for all engagements in one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRevenue {
    /// One line per engagement overlapping the month.
    pub lines: Vec<EngagementRevenue>,
    /// Sum of `net_revenue` across `lines`.
    pub net_revenue: Decimal,
}

/// Projects one engagement's revenue for the month `[month_start, month_end]`.
///
/// Returns `None` when the engagement does not overlap the month. Percentages
/// are applied as given; nothing is clamped. Fails with
/// [`ForecastError::CalculationError`](crate::error::ForecastError::CalculationError)
/// when the amounts leave the `Decimal` range.
///
/// # Example
///
/// ```
/// use consultant_forecast::calculation::project_engagement;
/// use consultant_forecast::models::{Engagement, HolidaySet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeSet;
///
/// let engagement = Engagement {
///     id: "eng_001".to_string(),
///     client_id: "client_001".to_string(),
///     name: String::new(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     hourly_rate: Decimal::new(1200, 0),
///     allocation_percent: Decimal::ONE_HUNDRED,
///     broker_fee_percent: Decimal::new(17, 0),
/// };
///
/// let line = project_engagement(
///     &engagement,
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     &HolidaySet::new(),
///     &BTreeSet::new(),
/// )?
/// .unwrap();
/// assert_eq!(line.gross_revenue, Decimal::new(211_200, 0));
/// assert_eq!(line.net_revenue, Decimal::new(175_296, 0));
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
pub fn project_engagement(
    engagement: &Engagement,
    month_start: NaiveDate,
    month_end: NaiveDate,
    holidays: &HolidaySet,
    effective_absences: &BTreeSet<NaiveDate>,
) -> ForecastResult<Option<EngagementRevenue>> {
    let active_start = engagement.start_date.max(month_start);
    let active_end = engagement.end_date.min(month_end);
    if active_start > active_end {
        return Ok(None);
    }

    let work_days = days_inclusive(active_start, active_end)
        .filter(|d| is_weekday(*d) && !holidays.contains(*d) && !effective_absences.contains(d))
        .count() as u32;

    let hours = Decimal::from(work_days * HOURS_PER_WORKDAY);
    let billable_hours =
        money::percent_of(hours, engagement.allocation_percent, "billable hours")?;
    let gross_revenue = money::mul(billable_hours, engagement.hourly_rate, "gross revenue")?;
    let broker_fee =
        money::percent_of(gross_revenue, engagement.broker_fee_percent, "broker fee")?;
    let net_revenue = money::sub(gross_revenue, broker_fee, "net revenue")?;

    debug!(
        engagement_id = %engagement.id,
        active_start = %active_start,
        active_end = %active_end,
        work_days,
        net_revenue = %net_revenue,
        "Projected engagement revenue"
    );

    Ok(Some(EngagementRevenue {
        engagement_id: engagement.id.clone(),
        work_days,
        hours,
        billable_hours,
        gross_revenue,
        broker_fee,
        net_revenue,
    }))
}

/// Projects the combined revenue of all engagements for one month.
pub fn project_month_revenue(
    engagements: &[Engagement],
    month_start: NaiveDate,
    month_end: NaiveDate,
    holidays: &HolidaySet,
    effective_absences: &BTreeSet<NaiveDate>,
) -> ForecastResult<MonthRevenue> {
    let mut lines = Vec::new();
    for engagement in engagements {
        if let Some(line) =
            project_engagement(engagement, month_start, month_end, holidays, effective_absences)?
        {
            lines.push(line);
        }
    }
    let net_revenue = money::sum(lines.iter().map(|l| l.net_revenue), "month revenue")?;

    Ok(MonthRevenue { lines, net_revenue })
}
