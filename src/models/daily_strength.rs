//! Daily strength records and staffing shortfalls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cross-staff tally for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStrength {
    /// The calendar date.
    pub date: NaiveDate,
    /// Staff on day shift.
    pub day_shift: u32,
    /// Staff on night shift.
    pub night_shift: u32,
    /// Staff on a rest day.
    pub off: u32,
    /// Staff on leave, training or otherwise unavailable.
    pub leave: u32,
    /// Whether a supervisory-rank staff member is on day or night shift.
    pub senior_on_duty: bool,
}

/// Which minimum-staffing rule a day failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallKind {
    /// Too few staff on day shift.
    DayShift,
    /// Too few staff on night shift.
    NightShift,
    /// Too few staff resting.
    Off,
    /// No supervisor on duty.
    NoSenior,
}

/// A day that fails one minimum-staffing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingShortfall {
    /// The calendar date.
    pub date: NaiveDate,
    /// The rule that failed.
    pub kind: ShortfallKind,
    /// The minimum required.
    pub required: u32,
    /// The count actually rostered.
    pub actual: u32,
}
