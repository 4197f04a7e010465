//! Absence records.
//!
//! Absences are registered as inclusive date ranges. Records are independent
//! and may overlap; deduplication happens during reconciliation, not here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The reason for an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceCategory {
    /// Planned time off.
    Vacation,
    /// Illness.
    Sick,
    /// Caring for a sick child or other dependent.
    DependentCare,
    /// Anything else.
    Other,
}

/// A registered absence spanning one or more calendar days.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::{AbsenceCategory, AbsenceRecord};
/// use chrono::NaiveDate;
///
/// let absence = AbsenceRecord {
///     id: "abs_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
///     category: AbsenceCategory::Vacation,
///     note: Some("Summer".to_string()),
/// };
///
/// assert!(!absence.is_inverted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    /// Unique identifier for the absence.
    pub id: String,
    /// First day of the absence (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the absence (inclusive).
    pub end_date: NaiveDate,
    /// The reason for the absence.
    pub category: AbsenceCategory,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AbsenceRecord {
    /// Returns true if the absence ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}
