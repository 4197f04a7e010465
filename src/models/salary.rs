//! Recorded gross salary per month.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};

/// Gross monthly salary keyed by `YYYY-MM`.
///
/// Months without an entry have a gross salary of zero. Deserialization
/// rejects any key that is not `YYYY-MM`.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::SalarySchedule;
/// use rust_decimal::Decimal;
///
/// let mut schedule = SalarySchedule::new();
/// schedule.set("2026-03", Decimal::new(55_000, 0))?;
///
/// assert_eq!(schedule.gross_for("2026-03"), Decimal::new(55_000, 0));
/// assert_eq!(schedule.gross_for("2026-04"), Decimal::ZERO);
/// # Ok::<(), consultant_forecast::error::ForecastError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Decimal>",
    into = "BTreeMap<String, Decimal>"
)]
pub struct SalarySchedule {
    entries: BTreeMap<String, Decimal>,
}

impl SalarySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule with the same gross salary in every month of `year`.
    pub fn uniform(year: i32, gross_salary: Decimal) -> Self {
        let entries = (1..=12)
            .map(|month| (format!("{:04}-{:02}", year, month), gross_salary))
            .collect();
        Self { entries }
    }

    /// Records the gross salary for a month, replacing any previous value.
    ///
    /// Returns `InvalidMonthKey` unless `month` is a `YYYY-MM` key.
    pub fn set(&mut self, month: &str, gross_salary: Decimal) -> ForecastResult<()> {
        validate_month_key(month)?;
        self.entries.insert(month.to_string(), gross_salary);
        Ok(())
    }

    /// Returns the gross salary for a month key, or zero if none is recorded.
    pub fn gross_for(&self, month: &str) -> Decimal {
        self.entries.get(month).copied().unwrap_or(Decimal::ZERO)
    }

    /// Iterates over recorded entries in month order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the number of recorded months.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no month has a recorded salary.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Decimal>> for SalarySchedule {
    type Error = ForecastError;

    fn try_from(entries: BTreeMap<String, Decimal>) -> Result<Self, Self::Error> {
        for key in entries.keys() {
            validate_month_key(key)?;
        }
        Ok(Self { entries })
    }
}

impl From<SalarySchedule> for BTreeMap<String, Decimal> {
    fn from(schedule: SalarySchedule) -> Self {
        schedule.entries
    }
}

/// Checks that `key` is a `YYYY-MM` month key.
pub fn validate_month_key(key: &str) -> ForecastResult<()> {
    let well_formed = key.len() == 7
        && NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d").is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(ForecastError::InvalidMonthKey {
            key: key.to_string(),
        })
    }
}
