//! Roster override requests.
//!
//! Overrides are caller-supplied exceptions to the generated pattern, matched
//! to roster slots by exact (staff id, date).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ShiftCode;
use crate::error::{EngineError, EngineResult};

/// Whether an override was planned in advance or recorded after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideCategory {
    /// Requested before the roster was published.
    Planned,
    /// Recorded on the day (sick call, absence, ...).
    Unplanned,
}

/// What an override does to its roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverrideKind {
    /// Keep the shift but pay no overtime or meal allowance.
    NoOvertime,
    /// Replace the shift with a leave code.
    Leave {
        /// The leave code shown for the day.
        leave_code: ShiftCode,
    },
    /// Replace the shift with another duty code.
    ShiftChange {
        /// The code shown for the day.
        shift_code: ShiftCode,
    },
    /// Work a day shift on a rest day.
    RestDayOvertime,
}

impl OverrideKind {
    /// Returns true if this kind replaces the displayed code.
    pub fn substitutes_code(&self) -> bool {
        !matches!(self, OverrideKind::NoOvertime)
    }
}

/// An exception request for one staff member on one date.
///
/// # Example
///
/// ```
/// use duty_roster::models::{OverrideKind, RosterOverride, ShiftCode};
/// use chrono::NaiveDate;
///
/// let leave = RosterOverride::new(
///     "101509",
///     NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
///     OverrideKind::Leave { leave_code: ShiftCode::AnnualLeave },
/// );
/// assert!(leave.validate().is_ok());
/// assert!(leave.matches("101509", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterOverride {
    /// The staff member the override applies to.
    pub staff_id: String,
    /// The exact date the override applies to.
    pub date: NaiveDate,
    /// What the override does.
    #[serde(flatten)]
    pub kind: OverrideKind,
    /// Planning category, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<OverrideCategory>,
    /// The other staff member when this is one half of a shift swap.
    ///
    /// Both halves are applied together or rejected together.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_with: Option<String>,
}

impl RosterOverride {
    /// Creates an uncategorised override.
    pub fn new(staff_id: impl Into<String>, date: NaiveDate, kind: OverrideKind) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            kind,
            category: None,
            swap_with: None,
        }
    }

    /// Sets the planning category.
    pub fn with_category(mut self, category: OverrideCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Builds the pair of shift-change overrides that swaps two staff
    /// members' shifts on one date.
    ///
    /// Each tuple is (staff id, code that staff member currently holds).
    /// The two overrides name each other in `swap_with`, so the engine
    /// rejects both if either one cannot be applied.
    ///
    /// # Example
    ///
    /// ```
    /// use duty_roster::models::{OverrideKind, RosterOverride, ShiftCode};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
    /// let [a, b] = RosterOverride::swap(
    ///     date,
    ///     ("101159", ShiftCode::DayShift),
    ///     ("100983", ShiftCode::NightShift),
    /// );
    /// assert_eq!(a.kind, OverrideKind::ShiftChange { shift_code: ShiftCode::NightShift });
    /// assert_eq!(b.kind, OverrideKind::ShiftChange { shift_code: ShiftCode::DayShift });
    /// assert_eq!(a.swap_with.as_deref(), Some("100983"));
    /// assert_eq!(b.swap_with.as_deref(), Some("101159"));
    /// ```
    pub fn swap(
        date: NaiveDate,
        first: (&str, ShiftCode),
        second: (&str, ShiftCode),
    ) -> [RosterOverride; 2] {
        let half = |(staff_id, _): (&str, ShiftCode), (partner_id, code): (&str, ShiftCode)| {
            RosterOverride {
                swap_with: Some(partner_id.to_string()),
                ..RosterOverride::new(staff_id, date, OverrideKind::ShiftChange { shift_code: code })
            }
        };
        [half(first, second), half(second, first)]
    }

    /// Checks whether this override targets the given slot.
    pub fn matches(&self, staff_id: &str, date: NaiveDate) -> bool {
        self.staff_id == staff_id && self.date == date
    }

    /// Validates the override's payload.
    ///
    /// Leave overrides must carry a leave-category code, and shift changes
    /// may not use the carried-forward or rest-day-overtime markers, which
    /// only the engine assigns. Only shift changes can be swap halves, and
    /// never with the same staff member.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOverride`] describing the problem.
    pub fn validate(&self) -> EngineResult<()> {
        if self.staff_id.trim().is_empty() {
            return Err(self.invalid("staff id must not be empty"));
        }

        if let Some(partner) = &self.swap_with {
            if !matches!(self.kind, OverrideKind::ShiftChange { .. }) {
                return Err(self.invalid("only shift changes can be swapped"));
            }
            if partner == &self.staff_id {
                return Err(self.invalid("cannot swap with oneself"));
            }
        }

        match self.kind {
            OverrideKind::Leave { leave_code } if !leave_code.is_leave() => {
                Err(self.invalid(&format!("'{}' is not a leave code", leave_code)))
            }
            OverrideKind::ShiftChange {
                shift_code: ShiftCode::CarriedForwardHoliday | ShiftCode::RestDayOvertime,
            } => Err(self.invalid("marker codes cannot be requested directly")),
            _ => Ok(()),
        }
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidOverride {
            staff_id: self.staff_id.clone(),
            date: self.date,
            message: message.to_string(),
        }
    }
}
