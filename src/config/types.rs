//! Configuration types for the work-day engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::calculation::DEFAULT_EXTENDED_SHIFT_THRESHOLD;
use crate::models::DailyType;

/// Settings for one daily service type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceTypeConfig {
    /// The human-readable name shown for the type.
    pub label: String,
    /// Contracted hours per day before overtime applies.
    pub regular_hours: Decimal,
}

/// Service types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTypesFile {
    /// Map of daily type to its settings.
    pub service_types: HashMap<DailyType, ServiceTypeConfig>,
}

fn default_extended_shift_threshold() -> Decimal {
    DEFAULT_EXTENDED_SHIFT_THRESHOLD
}

/// Business rules applied when work-day times are edited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Policy {
    /// Duration, in hours, at which a shift needs explicit confirmation.
    #[serde(default = "default_extended_shift_threshold")]
    pub extended_shift_threshold_hours: Decimal,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            extended_shift_threshold_hours: DEFAULT_EXTENDED_SHIFT_THRESHOLD,
        }
    }
}

/// Policy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// The policy section.
    pub policy: Policy,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Settings per daily service type.
    service_types: HashMap<DailyType, ServiceTypeConfig>,
    /// Editing policy.
    policy: Policy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(service_types: HashMap<DailyType, ServiceTypeConfig>, policy: Policy) -> Self {
        Self {
            service_types,
            policy,
        }
    }

    /// Returns all configured service types.
    pub fn service_types(&self) -> &HashMap<DailyType, ServiceTypeConfig> {
        &self.service_types
    }

    /// Returns the editing policy.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}
