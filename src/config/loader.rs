//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the jurisdiction
//! tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionConfig, JurisdictionMetadata, RatesConfig};

const BUILTIN_JURISDICTION: &str = include_str!("../../config/nz/jurisdiction.yaml");
const BUILTIN_RATES: &str = include_str!("../../config/nz/rates.yaml");

/// Loads and provides access to the jurisdiction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into a [`JurisdictionConfig`]. Validation happens once, here,
/// so malformed bracket tables are reported at load time rather than per call.
///
/// # Directory Structure
///
/// ```text
/// config/nz/
/// ├── jurisdiction.yaml   # Code, name, tax year, source URL
/// └── rates.yaml          # Tax brackets, ACC, student loan, benefit abatement
/// ```
///
/// # Example
///
/// ```no_run
/// use nz_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nz").unwrap();
/// println!("Tax year: {}", loader.metadata().tax_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: JurisdictionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/nz")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The tables are inconsistent (`ConfigurationError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RatesConfig>(&rates_path)?;

        let config = JurisdictionConfig::new(metadata, rates)?;
        debug!(
            path = %path.display(),
            code = %config.metadata().code,
            tax_year = %config.metadata().tax_year,
            brackets = config.tax_brackets().brackets().len(),
            "Loaded jurisdiction configuration"
        );

        Ok(Self { config })
    }

    /// Builds a loader from the configuration embedded in the crate.
    pub fn builtin() -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<JurisdictionMetadata>(
            BUILTIN_JURISDICTION,
            "<builtin>/jurisdiction.yaml",
        )?;
        let rates = Self::parse_yaml::<RatesConfig>(BUILTIN_RATES, "<builtin>/rates.yaml")?;

        Ok(Self {
            config: JurisdictionConfig::new(metadata, rates)?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the validated jurisdiction configuration.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> JurisdictionConfig {
        self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        self.config.metadata()
    }
}
