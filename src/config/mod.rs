//! Configuration loading and management for the work-day engine.
//!
//! This module provides functionality to load engine configurations from YAML files,
//! including the contracted hours of each daily service type and the extended-shift
//! confirmation policy.
//!
//! # Example
//!
//! ```no_run
//! use workday_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Confirmation threshold: {} hours", config.extended_shift_threshold());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, Policy, PolicyFile, ServiceTypeConfig, ServiceTypesFile};
