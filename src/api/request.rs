//! Request types for the forecast API.
//!
//! This module defines the JSON request structures for the `/projection` and
//! `/salary/breakdown` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ProjectionInput;
use crate::error::{ForecastError, ForecastResult};
use crate::models::{AbsenceRecord, Engagement, Holiday, SalarySchedule, TaxYearSettings};

/// Request body for the `/projection` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
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
    pub salaries: Vec<SalaryEntryRequest>,
    /// Tax settings overriding the configured ones for `year`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_settings: Option<TaxYearSettings>,
}

/// One month of gross salary in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryEntryRequest {
    /// The month key, `YYYY-MM`.
    pub month: String,
    /// Gross salary for the month.
    pub gross_salary: Decimal,
}

/// Request body for the `/salary/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBreakdownRequest {
    /// The year whose tax settings apply.
    pub year: i32,
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Tax settings overriding the configured ones for `year`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_settings: Option<TaxYearSettings>,
}

/// Builds a salary schedule, rejecting malformed month keys.
///
/// A month listed twice keeps its last value.
pub fn salary_schedule(entries: Vec<SalaryEntryRequest>) -> ForecastResult<SalarySchedule> {
    let mut schedule = SalarySchedule::new();
    for entry in entries {
        schedule.set(&entry.month, entry.gross_salary)?;
    }
    Ok(schedule)
}

impl TryFrom<ProjectionRequest> for ProjectionInput {
    type Error = ForecastError;

    fn try_from(req: ProjectionRequest) -> Result<Self, Self::Error> {
        Ok(ProjectionInput {
            year: req.year,
            engagements: req.engagements,
            absences: req.absences,
            holidays: req.holidays,
            salaries: salary_schedule(req.salaries)?,
        })
    }
}
