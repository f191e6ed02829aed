//! Configuration loading and management for the duty roster engine.
//!
//! This module provides functionality to load roster configurations from YAML
//! files, including unit metadata, roster rules, staffing thresholds, the
//! public holiday table and the default staff list.
//!
//! # Example
//!
//! ```no_run
//! use duty_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/penang_2026").unwrap();
//! println!("Loaded unit: {}", config.unit().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidaysFile, RosterConfig, RosterFile, RosterRules, StaffFile, StaffingThresholds,
    UnitMetadata,
};
