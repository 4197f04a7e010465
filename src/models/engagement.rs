//! Engagement model.
//!
//! An engagement is a client consulting contract: a date range during which
//! the consultant bills a client at an hourly rate, for some share of their
//! working time, optionally through a broker who keeps a percentage.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client consulting contract.
///
/// Both `start_date` and `end_date` are inclusive calendar dates.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::Engagement;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engagement = Engagement {
///     id: "eng_001".to_string(),
///     client_id: "client_acme".to_string(),
///     name: "Backend platform".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     hourly_rate: Decimal::new(1200, 0),
///     allocation_percent: Decimal::ONE_HUNDRED,
///     broker_fee_percent: Decimal::ZERO,
/// };
///
/// assert!(!engagement.is_inverted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    /// Unique identifier for the engagement.
    pub id: String,
    /// The client this engagement bills.
    pub client_id: String,
    /// Display name of the engagement.
    #[serde(default)]
    pub name: String,
    /// First day of the engagement (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the engagement (inclusive).
    pub end_date: NaiveDate,
    /// The billed rate per hour.
    pub hourly_rate: Decimal,
    /// Share of a full workday billed to this engagement, 0-100.
    #[serde(default = "default_allocation_percent")]
    pub allocation_percent: Decimal,
    /// Percentage of gross revenue kept by an intermediary, 0-100.
    #[serde(default)]
    pub broker_fee_percent: Decimal,
}

fn default_allocation_percent() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Engagement {
    /// Returns true if the engagement ends before it starts.
    ///
    /// Such an engagement contributes nothing to any month.
    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}
