//! Input inspection.
//!
//! The engine processes whatever it is given: inverted intervals contribute
//! nothing and percentages are applied unclamped. This module flags such
//! records as [`AuditWarning`]s so callers can see what was degraded without
//! the calculation failing.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AbsenceRecord, AuditWarning, Engagement, Holiday, SalarySchedule};

fn warning(code: &str, message: String, severity: &str) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

/// Inspects engagements for inverted intervals and out-of-range figures.
pub fn inspect_engagements(engagements: &[Engagement]) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    for e in engagements {
        if e.is_inverted() {
            warnings.push(warning(
                "INVERTED_ENGAGEMENT_INTERVAL",
                format!(
                    "Engagement '{}' ends ({}) before it starts ({}); it contributes no revenue",
                    e.id, e.end_date, e.start_date
                ),
                "high",
            ));
        }
        if !is_percentage(e.allocation_percent) {
            warnings.push(warning(
                "ALLOCATION_OUT_OF_RANGE",
                format!(
                    "Engagement '{}' has allocation {}% outside 0-100",
                    e.id, e.allocation_percent
                ),
                "medium",
            ));
        }
        if !is_percentage(e.broker_fee_percent) {
            warnings.push(warning(
                "BROKER_FEE_OUT_OF_RANGE",
                format!(
                    "Engagement '{}' has broker fee {}% outside 0-100",
                    e.id, e.broker_fee_percent
                ),
                "medium",
            ));
        }
        if e.hourly_rate <= Decimal::ZERO {
            warnings.push(warning(
                "NON_POSITIVE_HOURLY_RATE",
                format!("Engagement '{}' has hourly rate {}", e.id, e.hourly_rate),
                "medium",
            ));
        }
    }

    warnings
}

/// Inspects absences for inverted intervals.
pub fn inspect_absences(absences: &[AbsenceRecord]) -> Vec<AuditWarning> {
    absences
        .iter()
        .filter(|a| a.is_inverted())
        .map(|a| {
            warning(
                "INVERTED_ABSENCE_INTERVAL",
                format!(
                    "Absence '{}' ends ({}) before it starts ({}); it is ignored",
                    a.id, a.end_date, a.start_date
                ),
                "high",
            )
        })
        .collect()
}

/// Flags holidays dated outside `year`.
pub fn inspect_holidays(year: i32, holidays: &[Holiday]) -> Vec<AuditWarning> {
    holidays
        .iter()
        .filter(|h| h.date.year() != year)
        .map(|h| {
            warning(
                "HOLIDAY_OUTSIDE_YEAR",
                format!("Holiday '{}' on {} is outside {}", h.name, h.date, year),
                "low",
            )
        })
        .collect()
}

/// Flags salary entries whose month is not in `year`.
pub fn inspect_salaries(year: i32, salaries: &SalarySchedule) -> Vec<AuditWarning> {
    let prefix = format!("{:04}-", year);
    salaries
        .iter()
        .filter(|(month, _)| !month.starts_with(&prefix))
        .map(|(month, _)| {
            warning(
                "SALARY_OUTSIDE_YEAR",
                format!("Salary for {} is outside {} and is not used", month, year),
                "low",
            )
        })
        .collect()
}

/// Runs every inspection and logs each warning.
pub fn inspect_inputs(
    year: i32,
    engagements: &[Engagement],
    absences: &[AbsenceRecord],
    holidays: &[Holiday],
    salaries: &SalarySchedule,
) -> Vec<AuditWarning> {
    let mut warnings = inspect_engagements(engagements);
    warnings.extend(inspect_absences(absences));
    warnings.extend(inspect_holidays(year, holidays));
    warnings.extend(inspect_salaries(year, salaries));

    for w in &warnings {
        warn!(code = %w.code, severity = %w.severity, "{}", w.message);
    }

    warnings
}
