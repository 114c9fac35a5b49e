//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::DailyType;

use super::types::{EngineConfig, PolicyFile, ServiceTypeConfig, ServiceTypesFile};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query service types and the editing policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── service_types.yaml  # Label and contracted hours per daily type
/// └── policy.yaml         # Extended-shift confirmation threshold
/// ```
///
/// # Example
///
/// ```no_run
/// use workday_engine::config::ConfigLoader;
/// use workday_engine::models::DailyType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let regular = loader.regular_hours_for(DailyType::Disposition10).unwrap();
/// println!("Contracted hours: {}", regular);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A configured value is out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use workday_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), workday_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service_types_path = path.join("service_types.yaml");
        let service_types = Self::load_yaml::<ServiceTypesFile>(&service_types_path)?;
        for (daily_type, settings) in &service_types.service_types {
            if settings.regular_hours < Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: service_types_path.display().to_string(),
                    message: format!("regular_hours for {} must not be negative", daily_type),
                });
            }
        }

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyFile>(&policy_path)?.policy;
        if policy.extended_shift_threshold_hours <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: "extended_shift_threshold_hours must be positive".to_string(),
            });
        }

        debug!(
            path = %path.display(),
            service_types = service_types.service_types.len(),
            threshold = %policy.extended_shift_threshold_hours,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(service_types.service_types, policy),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets the settings for a daily type.
    ///
    /// # Returns
    ///
    /// Returns the settings if configured, or `ServiceTypeNotConfigured` error.
    pub fn get_service_type(&self, daily_type: DailyType) -> EngineResult<&ServiceTypeConfig> {
        self.config
            .service_types()
            .get(&daily_type)
            .ok_or_else(|| EngineError::ServiceTypeNotConfigured {
                daily_type: daily_type.to_string(),
            })
    }

    /// Gets the contracted hours per day for a daily type.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use workday_engine::config::ConfigLoader;
    /// use workday_engine::models::DailyType;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let hours = loader.regular_hours_for(DailyType::Disposition12)?;
    /// println!("Contracted hours: {}", hours);
    /// # Ok::<(), workday_engine::error::EngineError>(())
    /// ```
    pub fn regular_hours_for(&self, daily_type: DailyType) -> EngineResult<Decimal> {
        Ok(self.get_service_type(daily_type)?.regular_hours)
    }

    /// Duration, in hours, at which a shift needs confirmation.
    pub fn extended_shift_threshold(&self) -> Decimal {
        self.config.policy().extended_shift_threshold_hours
    }
}
