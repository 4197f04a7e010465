//! Configuration loading for the consultant forecast engine.
//!
//! This module loads a jurisdiction's metadata and its per-year tax settings
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use consultant_forecast::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/se").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ForecastConfig, JurisdictionMetadata};
