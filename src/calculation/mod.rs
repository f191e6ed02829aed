//! Calculation logic for the duty roster engine.
//!
//! This module contains the roster pipeline stages: rotation pattern
//! generation, override application, rest-day normalization, public holiday
//! carry-forward and payroll, together with the cross-staff daily strength
//! tally and the minimum staffing check.

mod daily_strength;
mod generator;
mod holiday_carry_forward;
mod override_applier;
mod payroll;
mod rest_day_normalizer;
mod rotation_pattern;
mod staffing_check;

pub use daily_strength::calculate_daily_strength;
pub use generator::{find_unmatched_overrides, generate_roster};
pub use holiday_carry_forward::carry_forward_holidays;
pub use override_applier::{apply_overrides, find_broken_swaps, rejection_reason};
pub use payroll::{DayPay, calculate_payroll, day_pay};
pub use rest_day_normalizer::normalize_rest_days;
pub use rotation_pattern::{
    BASE_PATTERN, STAGGER_PER_STAFF, generate_pattern, pattern_index, rotation_code,
};
pub use staffing_check::check_staffing;
