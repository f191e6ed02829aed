//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, Staff};

use super::types::{
    HolidaysFile, RosterConfig, RosterFile, RosterRules, StaffFile, StaffingThresholds,
    UnitMetadata,
};

/// Loads and provides access to roster configuration.
///
/// # Directory Structure
///
/// ```text
/// config/penang_2026/
/// ├── roster.yaml    # Unit metadata, roster rules, staffing thresholds
/// ├── holidays.yaml  # Public holiday table keyed by month/day
/// └── staff.yaml     # Default staff list in roster order
/// ```
///
/// # Example
///
/// ```no_run
/// use duty_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/penang_2026").unwrap();
/// println!("Loaded unit: {}", loader.unit().name);
/// println!("Staff on roster: {}", loader.staff().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Two staff records share an id
    ///
    /// # Example
    ///
    /// ```no_run
    /// use duty_roster::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/penang_2026")?;
    /// # Ok::<(), duty_roster::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let roster = Self::load_yaml::<RosterFile>(&path.join("roster.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysFile>(&path.join("holidays.yaml"))?;
        let staff = Self::load_yaml::<StaffFile>(&path.join("staff.yaml"))?;

        Self::check_unique_ids(&staff.staff)?;

        debug!(
            unit = %roster.unit.code,
            holidays = holidays.holidays.len(),
            staff = staff.staff.len(),
            "Loaded roster configuration"
        );

        let config = RosterConfig::new(
            roster.unit,
            roster.rules,
            roster.staffing,
            holidays.holidays,
            staff.staff,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: RosterConfig) -> Self {
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

    /// Rejects a staff list in which two records share an id.
    pub(crate) fn check_unique_ids(staff: &[Staff]) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for member in staff {
            if !seen.insert(member.id.as_str()) {
                return Err(EngineError::DuplicateStaff {
                    id: member.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the unit metadata.
    pub fn unit(&self) -> &UnitMetadata {
        self.config.unit()
    }

    /// Returns the roster rules.
    pub fn rules(&self) -> &RosterRules {
        self.config.rules()
    }

    /// Returns the staffing thresholds.
    pub fn staffing(&self) -> &StaffingThresholds {
        self.config.staffing()
    }

    /// Returns the public holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        self.config.holidays()
    }

    /// Returns the default staff list.
    pub fn staff(&self) -> &[Staff] {
        self.config.staff()
    }
}
