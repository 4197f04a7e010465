//! Configuration types for the forecast engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::TaxYearSettings;

/// Metadata about the tax jurisdiction.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// The jurisdiction code (e.g., "SE").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The ISO currency code all amounts are expressed in.
    pub currency: String,
}

/// The complete loaded configuration for one jurisdiction.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    jurisdiction: JurisdictionMetadata,
    tax_years: BTreeMap<i32, TaxYearSettings>,
}

impl ForecastConfig {
    /// Creates a new configuration from its parts.
    pub fn new(
        jurisdiction: JurisdictionMetadata,
        tax_years: BTreeMap<i32, TaxYearSettings>,
    ) -> Self {
        Self {
            jurisdiction,
            tax_years,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.jurisdiction
    }

    /// Returns the tax settings keyed by year.
    pub fn tax_years(&self) -> &BTreeMap<i32, TaxYearSettings> {
        &self.tax_years
    }
}
