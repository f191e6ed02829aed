//! Per-staff roster output.
//!
//! This module contains the [`StaffRoster`] type returned for every staff
//! member, with its per-day cells, aggregated [`RosterSummary`] and the
//! [`Conflict`] warnings raised while building it.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayStatus, Staff};

/// Aggregated totals for one staff member over the period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Days worked (day shift, night shift or carried-forward working day).
    pub workdays: u32,
    /// Days coded as rest.
    pub restdays: u32,
    /// Days explicitly flagged as rest-day overtime.
    pub rest_day_overtime: u32,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
    /// Public holidays actually worked.
    pub public_holidays: u32,
    /// Days carrying the carried-forward-holiday marker.
    pub carried_forward: u32,
    /// Total meal allowance.
    pub meal_allowance: Decimal,
}

/// A data-quality warning attached to a staff roster.
///
/// # Example
///
/// ```
/// use duty_roster::models::Conflict;
///
/// let conflict = Conflict::LongStreak { threshold: 10 };
/// assert_eq!(conflict.to_string(), "Long streak (>10 days)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conflict {
    /// More than `threshold` consecutive working days.
    LongStreak {
        /// The streak length that was exceeded.
        threshold: u32,
    },
    /// Fewer than `minimum` rest days in the period.
    LowRest {
        /// The expected number of rest days.
        minimum: u32,
    },
    /// An override that could not be applied to its slot.
    RejectedOverride {
        /// The date of the rejected override.
        date: NaiveDate,
        /// Why it was rejected.
        reason: String,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::LongStreak { threshold } => write!(f, "Long streak (>{} days)", threshold),
            Conflict::LowRest { minimum } => write!(f, "Low rest (<{} days)", minimum),
            Conflict::RejectedOverride { date, reason } => {
                write!(f, "Override rejected on {}: {}", date, reason)
            }
        }
    }
}

/// One staff member's roster for the whole period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRoster {
    /// The staff member.
    pub staff: Staff,
    /// One entry per date of the period, in order.
    pub days: Vec<DayStatus>,
    /// Aggregated totals.
    pub summary: RosterSummary,
    /// Warnings raised for this staff member.
    pub conflicts: Vec<Conflict>,
}

impl StaffRoster {
    /// Creates a roster with an empty summary and no conflicts.
    pub fn new(staff: Staff, days: Vec<DayStatus>) -> Self {
        Self {
            staff,
            days,
            summary: RosterSummary::default(),
            conflicts: Vec::new(),
        }
    }

    /// Records a conflict unless an identical one is already present.
    pub fn push_conflict(&mut self, conflict: Conflict) {
        if !self.conflicts.contains(&conflict) {
            self.conflicts.push(conflict);
        }
    }

    /// Looks up the cell for a date.
    pub fn day(&self, date: NaiveDate) -> Option<&DayStatus> {
        self.days.iter().find(|d| d.date == date)
    }
}
