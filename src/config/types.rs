//! Configuration types for roster generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every rule has a default
//! matching the unit's standing orders, so a partial `roster.yaml` is valid.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{HolidayCalendar, Staff};

/// Metadata about the unit the roster is for.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitMetadata {
    /// Short unit code.
    pub code: String,
    /// Human-readable unit name.
    pub name: String,
}

/// Numeric rules applied by the roster pipeline.
///
/// # Example
///
/// ```
/// use duty_roster::config::RosterRules;
/// use rust_decimal::Decimal;
///
/// let rules = RosterRules::default();
/// assert_eq!(rules.max_rest_days, 4);
/// assert_eq!(rules.min_rest_days, 4);
/// assert_eq!(rules.weekend_day_meal, Decimal::from(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterRules {
    /// Year whose January anchors the quarterly rest-day drift.
    pub rotation_epoch_year: i32,
    /// Maximum rest days per staff per period.
    pub max_rest_days: u32,
    /// Rest days per period below which a roster is flagged as low rest.
    pub min_rest_days: u32,
    /// Overtime hours credited for each worked shift.
    pub overtime_hours_per_shift: Decimal,
    /// Meal allowance for a weekday day shift, any night shift and any
    /// carried-forward day.
    pub standard_meal: Decimal,
    /// Meal allowance for a day shift on Saturday or Sunday.
    pub weekend_day_meal: Decimal,
    /// Consecutive working days allowed before a long-streak warning.
    pub long_streak_threshold: u32,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self {
            rotation_epoch_year: 2025,
            max_rest_days: 4,
            min_rest_days: 4,
            overtime_hours_per_shift: Decimal::from(4),
            standard_meal: Decimal::from(10),
            weekend_day_meal: Decimal::from(20),
            long_streak_threshold: 10,
        }
    }
}

/// Minimum staffing levels checked against daily strength.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaffingThresholds {
    /// Minimum staff on day shift.
    pub min_day_shift: u32,
    /// Minimum staff on night shift.
    pub min_night_shift: u32,
    /// Minimum staff resting.
    pub min_off: u32,
    /// Whether a supervisor must be on duty every day.
    pub require_senior: bool,
}

impl Default for StaffingThresholds {
    fn default() -> Self {
        Self {
            min_day_shift: 3,
            min_night_shift: 3,
            min_off: 2,
            require_senior: true,
        }
    }
}

/// Structure of `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Unit metadata.
    pub unit: UnitMetadata,
    /// Roster rules.
    #[serde(default)]
    pub rules: RosterRules,
    /// Staffing thresholds.
    #[serde(default)]
    pub staffing: StaffingThresholds,
}

/// Structure of `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The holiday table.
    pub holidays: HolidayCalendar,
}

/// Structure of `staff.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffFile {
    /// The default staff list, in roster order.
    pub staff: Vec<Staff>,
}

/// The complete roster configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    unit: UnitMetadata,
    rules: RosterRules,
    staffing: StaffingThresholds,
    holidays: HolidayCalendar,
    staff: Vec<Staff>,
}

impl RosterConfig {
    /// Creates a new RosterConfig from its component parts.
    pub fn new(
        unit: UnitMetadata,
        rules: RosterRules,
        staffing: StaffingThresholds,
        holidays: HolidayCalendar,
        staff: Vec<Staff>,
    ) -> Self {
        Self {
            unit,
            rules,
            staffing,
            holidays,
            staff,
        }
    }

    /// Returns the unit metadata.
    pub fn unit(&self) -> &UnitMetadata {
        &self.unit
    }

    /// Returns the roster rules.
    pub fn rules(&self) -> &RosterRules {
        &self.rules
    }

    /// Returns the staffing thresholds.
    pub fn staffing(&self) -> &StaffingThresholds {
        &self.staffing
    }

    /// Returns the public holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns the default staff list.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }
}
