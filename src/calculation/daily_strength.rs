//! Daily strength aggregation.
//!
//! Tallies, for every date of the period, how many staff are on each kind of
//! duty across all rosters.

use crate::models::{DailyStrength, ShiftCode, StaffRoster};

/// Builds one [`DailyStrength`] per date from a set of finished rosters.
///
/// Counting uses each day's effective code, so a carried-forward marker
/// counts as the shift it replaced. A senior is on duty when any staff
/// member of supervisory rank is on a day or night shift. All rosters are
/// expected to span the same dates; the first roster supplies them.
///
/// # Example
///
/// ```
/// use duty_roster::calculation::calculate_daily_strength;
///
/// assert!(calculate_daily_strength(&[]).is_empty());
/// ```
pub fn calculate_daily_strength(rosters: &[StaffRoster]) -> Vec<DailyStrength> {
    let Some(first) = rosters.first() else {
        return Vec::new();
    };

    first
        .days
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let mut strength = DailyStrength {
                date: template.date,
                day_shift: 0,
                night_shift: 0,
                off: 0,
                leave: 0,
                senior_on_duty: false,
            };

            for roster in rosters {
                let Some(day) = roster.days.get(index) else {
                    continue;
                };
                let code = day.effective_code();
                match code {
                    ShiftCode::DayShift => strength.day_shift += 1,
                    ShiftCode::NightShift => strength.night_shift += 1,
                    ShiftCode::Rest => strength.off += 1,
                    c if c.is_leave() => strength.leave += 1,
                    _ => {}
                }
                if code.is_working() && roster.staff.rank.is_supervisory() {
                    strength.senior_on_duty = true;
                }
            }

            strength
        })
        .collect()
}
