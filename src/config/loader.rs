//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! configurations from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ForecastError, ForecastResult};
use crate::models::TaxYearSettings;

use super::types::{ForecastConfig, JurisdictionMetadata};

/// Loads and provides access to jurisdiction configuration.
///
/// # Directory Structure
///
/// ```text
/// config/se/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// └── tax_years/
///     ├── 2025.yaml       # One TaxYearSettings per file
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use consultant_forecast::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/se").unwrap();
///
/// let settings = loader.tax_settings(2026).unwrap();
/// println!("Employer tax: {}%", settings.employer_tax_percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ForecastConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/se")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `jurisdiction.yaml` or the `tax_years` directory is missing
    /// - Any file contains invalid YAML
    /// - Two files configure the same year
    pub fn load<P: AsRef<Path>>(path: P) -> ForecastResult<Self> {
        let path = path.as_ref();

        let jurisdiction =
            Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let tax_years = Self::load_tax_years(&path.join("tax_years"))?;

        debug!(
            jurisdiction = %jurisdiction.code,
            years = tax_years.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: ForecastConfig::new(jurisdiction, tax_years),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ForecastResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ForecastError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ForecastError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every tax year file from the tax_years directory.
    fn load_tax_years(dir: &Path) -> ForecastResult<BTreeMap<i32, TaxYearSettings>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| ForecastError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tax_years = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| ForecastError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let settings = Self::load_yaml::<TaxYearSettings>(&path)?;
                if let Some(previous) = tax_years.insert(settings.year, settings) {
                    return Err(ForecastError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!("duplicate settings for year {}", previous.year),
                    });
                }
            }
        }

        if tax_years.is_empty() {
            return Err(ForecastError::ConfigNotFound {
                path: format!("{} (no tax year files found)", dir_str),
            });
        }

        Ok(tax_years)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Gets the tax settings for a year.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use consultant_forecast::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/se")?;
    /// let settings = loader.tax_settings(2026)?;
    /// println!("Municipal tax: {}%", settings.municipality_tax_percent);
    /// # Ok::<(), consultant_forecast::error::ForecastError>(())
    /// ```
    pub fn tax_settings(&self, year: i32) -> ForecastResult<&TaxYearSettings> {
        self.config
            .tax_years()
            .get(&year)
            .ok_or(ForecastError::TaxSettingsNotFound { year })
    }

    /// Returns the configured years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.config.tax_years().keys().copied().collect()
    }
}
