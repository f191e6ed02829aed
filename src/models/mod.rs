//! Core data models for the duty roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_strength;
mod day_status;
mod holiday;
mod payroll_period;
mod roster;
mod roster_override;
mod shift_code;
mod staff;

pub use daily_strength::{DailyStrength, ShortfallKind, StaffingShortfall};
pub use day_status::DayStatus;
pub use holiday::{HolidayCalendar, PublicHoliday};
pub use payroll_period::{PERIOD_END_DAY, PERIOD_START_DAY, PayrollPeriod, global_day_index};
pub use roster::{Conflict, RosterSummary, StaffRoster};
pub use roster_override::{OverrideCategory, OverrideKind, RosterOverride};
pub use shift_code::ShiftCode;
pub use staff::{Rank, Staff};
