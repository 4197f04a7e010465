//! Tax settings for a single year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax parameters for one calendar year.
///
/// These are loaded from configuration (see [`crate::config::ConfigLoader`])
/// or supplied by the caller, and are passed explicitly into every salary and
/// tax calculation.
///
/// # Example
///
/// ```
/// use consultant_forecast::models::TaxYearSettings;
/// use rust_decimal::Decimal;
///
/// let settings = TaxYearSettings {
///     year: 2026,
///     state_tax_threshold_annual: Decimal::new(643_000, 0),
///     municipality_tax_percent: Decimal::new(30, 0),
///     employer_tax_percent: Decimal::new(3142, 2),
/// };
/// assert_eq!(settings.monthly_state_tax_threshold().round_dp(2), Decimal::new(5_358_333, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearSettings {
    /// The calendar year these settings apply to.
    pub year: i32,
    /// Annual gross income above which state tax applies.
    pub state_tax_threshold_annual: Decimal,
    /// Flat municipal income tax rate, in percent.
    pub municipality_tax_percent: Decimal,
    /// Employer social contribution rate, in percent.
    pub employer_tax_percent: Decimal,
}

impl TaxYearSettings {
    /// The annual state tax threshold spread evenly over twelve months.
    pub fn monthly_state_tax_threshold(&self) -> Decimal {
        self.state_tax_threshold_annual / Decimal::from(12)
    }
}
