//! Roster generation pipeline.
//!
//! Runs the stages in their fixed order for every staff member:
//!
//! 1. Rotation pattern
//! 2. Overrides
//! 3. Rest-day normalization
//! 4. Public holiday carry-forward
//! 5. Payroll
//!
//! The pipeline is pure: the same inputs always produce the same rosters.

use tracing::{debug, warn};

use crate::config::RosterRules;
use crate::models::{DayStatus, HolidayCalendar, PayrollPeriod, RosterOverride, Staff, StaffRoster};

use super::{
    apply_overrides, calculate_payroll, carry_forward_holidays, find_broken_swaps,
    generate_pattern, normalize_rest_days,
};

/// Generates one roster per staff member, in staff-list order.
///
/// A staff member's position in `staff` determines their stagger into the
/// rotation cycle. Overrides naming unknown staff or dates outside the
/// period are logged once at warn level and otherwise ignored; see
/// [`find_unmatched_overrides`]. Both halves of a shift swap are rejected
/// if either half cannot be applied; see [`find_broken_swaps`].
///
/// # Example
///
/// ```
/// use duty_roster::calculation::generate_roster;
/// use duty_roster::config::RosterRules;
/// use duty_roster::models::{HolidayCalendar, PayrollPeriod, Rank, Staff};
///
/// let period = PayrollPeriod::new(2026, 2).unwrap();
/// let staff = vec![Staff {
///     id: "S003".to_string(),
///     badge_number: "70003".to_string(),
///     rank: Rank::Constable,
///     name: "Constable Charlie".to_string(),
///     call_sign: None,
///     vehicle: None,
///     fixed_rotation: false,
/// }];
///
/// let rosters = generate_roster(
///     &period,
///     &staff,
///     &[],
///     &HolidayCalendar::default(),
///     &RosterRules::default(),
/// );
///
/// assert_eq!(rosters.len(), 1);
/// assert_eq!(rosters[0].days.len(), period.dates().len());
/// assert!(rosters[0].summary.restdays <= 4);
/// ```
pub fn generate_roster(
    period: &PayrollPeriod,
    staff: &[Staff],
    overrides: &[RosterOverride],
    calendar: &HolidayCalendar,
    rules: &RosterRules,
) -> Vec<StaffRoster> {
    let dates = period.dates();
    let quarter_block = period.quarter_block(rules.rotation_epoch_year);

    debug!(
        year = period.year(),
        month = period.month(),
        days = dates.len(),
        staff = staff.len(),
        overrides = overrides.len(),
        quarter_block,
        "Generating roster"
    );

    for o in find_unmatched_overrides(staff, overrides, period) {
        warn!(
            staff_id = %o.staff_id,
            date = %o.date,
            "Override does not match any roster slot"
        );
    }

    let patterns: Vec<StaffRoster> = staff
        .iter()
        .enumerate()
        .map(|(staff_index, member)| {
            let codes = generate_pattern(member, staff_index, &dates, quarter_block);
            let days = dates
                .iter()
                .zip(codes)
                .map(|(date, code)| DayStatus::new(*date, code))
                .collect();
            StaffRoster::new(member.clone(), days)
        })
        .collect();

    let broken_swaps = find_broken_swaps(&patterns, overrides);

    patterns
        .into_iter()
        .map(|mut roster| {
            let staff_id = roster.staff.id.clone();

            let applied = apply_overrides(&mut roster, overrides, &broken_swaps);
            debug!(%staff_id, applied, "Overrides applied");

            let normalized = normalize_rest_days(&mut roster, rules.max_rest_days);
            debug!(%staff_id, normalized, "Rest days normalized");

            let carried = carry_forward_holidays(&mut roster, calendar);
            debug!(%staff_id, carried, "Holidays carried forward");

            calculate_payroll(&mut roster, overrides, calendar, rules);
            debug!(
                %staff_id,
                workdays = roster.summary.workdays,
                restdays = roster.summary.restdays,
                conflicts = roster.conflicts.len(),
                "Payroll calculated"
            );

            roster
        })
        .collect()
}

/// Returns the overrides that cannot match any roster slot.
///
/// An override is unmatched when no staff member has its `staff_id` or when
/// its date falls outside the period. This does not log; [`generate_roster`]
/// logs each unmatched override.
pub fn find_unmatched_overrides<'a>(
    staff: &[Staff],
    overrides: &'a [RosterOverride],
    period: &PayrollPeriod,
) -> Vec<&'a RosterOverride> {
    overrides
        .iter()
        .filter(|o| !staff.iter().any(|s| s.id == o.staff_id) || !period.contains_date(o.date))
        .collect()
}
