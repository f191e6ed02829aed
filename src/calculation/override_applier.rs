//! Override application.
//!
//! This module overlays caller-supplied exceptions onto a staff member's
//! generated pattern. Only overrides that replace the displayed code act
//! here; no-overtime requests are consumed later by payroll.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::EngineError;
use crate::models::{Conflict, DayStatus, OverrideKind, RosterOverride, ShiftCode, StaffRoster};

/// Applies leave, shift-change and rest-day-overtime overrides to a roster.
///
/// For each day, the first override in list order that matches the slot
/// and substitutes a code is applied; any later ones for the same slot are
/// ignored. Overrides that cannot be honoured are recorded as
/// [`Conflict::RejectedOverride`]. See [`rejection_reason`] for the rules,
/// and [`find_broken_swaps`] for the swap halves passed in `broken_swaps`
/// (keyed by index into `overrides`).
///
/// # Returns
///
/// The number of days whose code was changed.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use duty_roster::calculation::apply_overrides;
/// use duty_roster::models::{
///     DayStatus, OverrideKind, Rank, RosterOverride, ShiftCode, Staff, StaffRoster,
/// };
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
/// let staff = Staff {
///     id: "S003".to_string(),
///     badge_number: "70003".to_string(),
///     rank: Rank::Constable,
///     name: "Constable Charlie".to_string(),
///     call_sign: None,
///     vehicle: None,
///     fixed_rotation: false,
/// };
/// let mut roster = StaffRoster::new(staff, vec![DayStatus::new(date, ShiftCode::NightShift)]);
///
/// let overrides = vec![RosterOverride::new(
///     "S003",
///     date,
///     OverrideKind::Leave { leave_code: ShiftCode::AnnualLeave },
/// )];
///
/// assert_eq!(apply_overrides(&mut roster, &overrides, &HashMap::new()), 1);
/// assert_eq!(roster.days[0].code, ShiftCode::AnnualLeave);
/// assert_eq!(roster.days[0].original_code, Some(ShiftCode::NightShift));
/// ```
pub fn apply_overrides(
    roster: &mut StaffRoster,
    overrides: &[RosterOverride],
    broken_swaps: &HashMap<usize, String>,
) -> usize {
    let fixed_rotation = roster.staff.fixed_rotation;
    let mut applied = 0;
    let mut rejected = Vec::new();

    for day in roster.days.iter_mut() {
        let Some(index) = effective_override(overrides, &roster.staff.id, day.date) else {
            continue;
        };
        let o = &overrides[index];

        let reason = rejection_reason(o, day, fixed_rotation)
            .or_else(|| broken_swaps.get(&index).cloned());
        if let Some(reason) = reason {
            rejected.push((day.date, reason));
            continue;
        }

        let before = day.code;
        match o.kind {
            OverrideKind::Leave { leave_code } => day.substitute(leave_code),
            OverrideKind::ShiftChange { shift_code } => day.substitute(shift_code),
            OverrideKind::RestDayOvertime => {
                day.substitute(ShiftCode::DayShift);
                day.rest_day_overtime = true;
            }
            OverrideKind::NoOvertime => {}
        }

        if day.code != before {
            applied += 1;
        }
    }

    for (date, reason) in rejected {
        warn!(staff_id = %roster.staff.id, %date, reason = %reason, "Override rejected");
        roster.push_conflict(Conflict::RejectedOverride { date, reason });
    }

    applied
}

/// Explains why an override cannot be applied to a day, or returns `None`
/// if it can.
///
/// An override is rejected when:
/// - its payload fails [`RosterOverride::validate`]
/// - it would put a fixed-rotation staff member on night shift, whatever
///   its kind
/// - it requests rest-day overtime on a day that is not a rest day
pub fn rejection_reason(
    o: &RosterOverride,
    day: &DayStatus,
    fixed_rotation: bool,
) -> Option<String> {
    match o.validate() {
        Ok(()) => {}
        Err(EngineError::InvalidOverride { message, .. }) => return Some(message),
        Err(err) => return Some(err.to_string()),
    }

    let target = match o.kind {
        OverrideKind::Leave { leave_code } => leave_code,
        OverrideKind::ShiftChange { shift_code } => shift_code,
        OverrideKind::RestDayOvertime if day.code != ShiftCode::Rest => {
            return Some("rest-day overtime requires a rest day".to_string());
        }
        OverrideKind::RestDayOvertime => ShiftCode::DayShift,
        OverrideKind::NoOvertime => return None,
    };

    if fixed_rotation && target == ShiftCode::NightShift {
        return Some("fixed-rotation staff cannot work night shift".to_string());
    }
    None
}

/// Finds the swap halves that must be rejected because their partner
/// cannot be applied.
///
/// The two halves of a swap (overrides whose `swap_with` name each other
/// on the same date) are applied together or not at all. A half is broken
/// when its partner is missing, is not the override that takes effect on
/// its slot, or is itself rejected by [`rejection_reason`].
///
/// `rosters` must hold the generated patterns before any override is
/// applied. Returns the broken halves keyed by index into `overrides`.
pub fn find_broken_swaps(
    rosters: &[StaffRoster],
    overrides: &[RosterOverride],
) -> HashMap<usize, String> {
    let mut outcomes: HashMap<usize, Option<String>> = HashMap::new();
    for roster in rosters {
        for day in &roster.days {
            if let Some(index) = effective_override(overrides, &roster.staff.id, day.date) {
                let reason = rejection_reason(&overrides[index], day, roster.staff.fixed_rotation);
                outcomes.insert(index, reason);
            }
        }
    }

    let mut broken = HashMap::new();
    for (index, o) in overrides.iter().enumerate() {
        let Some(partner_id) = o.swap_with.as_deref() else {
            continue;
        };
        // Halves that are rejected on their own, or never take effect,
        // need no further check.
        let Some(None) = outcomes.get(&index) else {
            continue;
        };

        let partner = overrides.iter().position(|p| {
            p.matches(partner_id, o.date) && p.swap_with.as_deref() == Some(o.staff_id.as_str())
        });
        let reason = match partner.map(|p| outcomes.get(&p)) {
            None => Some(format!("swap partner '{}' has no matching override", partner_id)),
            Some(None) => Some(format!("swap partner '{}' is not applied", partner_id)),
            Some(Some(Some(partner_reason))) => Some(format!(
                "swap partner '{}' was rejected: {}",
                partner_id, partner_reason
            )),
            Some(Some(None)) => None,
        };
        if let Some(reason) = reason {
            broken.insert(index, reason);
        }
    }
    broken
}

/// Index of the override that takes effect on a slot: the first in list
/// order that substitutes a code.
fn effective_override(
    overrides: &[RosterOverride],
    staff_id: &str,
    date: NaiveDate,
) -> Option<usize> {
    overrides
        .iter()
        .position(|o| o.kind.substitutes_code() && o.matches(staff_id, date))
}
