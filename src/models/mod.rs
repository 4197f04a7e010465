//! Core data models for the consultant forecast engine.
//!
//! This module contains the input records (engagements, absences, holidays,
//! salaries, tax settings) and the derived projection series.

mod absence;
mod engagement;
mod holiday;
mod projection;
mod salary;
mod tax_settings;

pub use absence::{AbsenceCategory, AbsenceRecord};
pub use engagement::Engagement;
pub use holiday::{Holiday, HolidayKind, HolidaySet, bridge_days};
pub use projection::{
    AuditStep, AuditTrace, AuditWarning, FinancialTotals, MonthlyFinancials, MonthlyStats,
    ProjectionResult,
};
pub use salary::{SalarySchedule, validate_month_key};
pub use tax_settings::TaxYearSettings;
