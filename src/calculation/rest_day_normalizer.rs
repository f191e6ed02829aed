//! Rest-day normalization.
//!
//! The rotation can hand a staff member five rest days in a long period.
//! This module caps rest days per period, converting the excess into
//! working shifts from the end of the period backwards.

use crate::models::{ShiftCode, StaffRoster};

/// Caps the number of rest days in a roster at `max_rest_days`.
///
/// Excess rest days are converted starting from the latest date. Each
/// converted day alternates against the day before it: night shift after
/// a day shift, day shift after a night shift, and day shift when the
/// previous day is neither or does not exist. Fixed-rotation staff always
/// get a day shift. The rest code is kept in `original_code`.
///
/// # Returns
///
/// The number of rest days converted.
///
/// # Example
///
/// ```
/// use duty_roster::calculation::normalize_rest_days;
/// use duty_roster::models::{DayStatus, Rank, ShiftCode, Staff, StaffRoster};
/// use chrono::NaiveDate;
///
/// let staff = Staff {
///     id: "S005".to_string(),
///     badge_number: "70005".to_string(),
///     rank: Rank::Constable,
///     name: "Constable Echo".to_string(),
///     call_sign: None,
///     vehicle: None,
///     fixed_rotation: false,
/// };
/// let codes = [
///     ShiftCode::Rest, ShiftCode::DayShift, ShiftCode::Rest,
///     ShiftCode::Rest, ShiftCode::NightShift, ShiftCode::Rest,
/// ];
/// let days = NaiveDate::from_ymd_opt(2026, 2, 1)
///     .unwrap()
///     .iter_days()
///     .zip(codes)
///     .map(|(date, code)| DayStatus::new(date, code))
///     .collect();
/// let mut roster = StaffRoster::new(staff, days);
///
/// assert_eq!(normalize_rest_days(&mut roster, 3), 1);
/// // The last rest day follows a night shift, so it becomes a day shift.
/// assert_eq!(roster.days[5].code, ShiftCode::DayShift);
/// assert_eq!(roster.days[5].original_code, Some(ShiftCode::Rest));
/// ```
pub fn normalize_rest_days(roster: &mut StaffRoster, max_rest_days: u32) -> usize {
    let rest_indices: Vec<usize> = roster
        .days
        .iter()
        .enumerate()
        .filter(|(_, d)| d.code == ShiftCode::Rest)
        .map(|(i, _)| i)
        .collect();

    let max_rest_days = max_rest_days as usize;
    if rest_indices.len() <= max_rest_days {
        return 0;
    }

    let excess = rest_indices.len() - max_rest_days;
    let fixed_rotation = roster.staff.fixed_rotation;

    for &index in rest_indices.iter().rev().take(excess) {
        let replacement = if fixed_rotation {
            ShiftCode::DayShift
        } else {
            let previous = index.checked_sub(1).map(|p| roster.days[p].code);
            match previous {
                Some(ShiftCode::DayShift) => ShiftCode::NightShift,
                _ => ShiftCode::DayShift,
            }
        };
        roster.days[index].substitute(replacement);
    }

    excess
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayStatus, Rank, Staff};
    use chrono::NaiveDate;

    fn create_roster(fixed_rotation: bool, codes: &[ShiftCode]) -> StaffRoster {
        let staff = Staff {
            id: "S006".to_string(),
            badge_number: "70006".to_string(),
            rank: Rank::Constable,
            name: "Constable Foxtrot".to_string(),
            call_sign: None,
            vehicle: None,
            fixed_rotation,
        };
        let days = NaiveDate::from_ymd_opt(2026, 1, 26)
            .unwrap()
            .iter_days()
            .zip(codes.iter().copied())
            .map(|(date, code)| DayStatus::new(date, code))
            .collect();
        StaffRoster::new(staff, days)
    }

    fn rest_count(roster: &StaffRoster) -> usize {
        roster.days.iter().filter(|d| d.code == ShiftCode::Rest).count()
    }

    use crate::models::ShiftCode::{DayShift as S, NightShift as M, Rest as O};

    #[test]
    fn test_at_limit_is_untouched() {
        let mut roster = create_roster(false, &[O, S, O, M, O, S, O]);
        assert_eq!(normalize_rest_days(&mut roster, 4), 0);
        assert_eq!(rest_count(&roster), 4);
        assert!(roster.days.iter().all(|d| d.original_code.is_none()));
    }

    #[test]
    fn test_fewer_than_limit_is_untouched() {
        let mut roster = create_roster(false, &[S, S, O, M]);
        assert_eq!(normalize_rest_days(&mut roster, 4), 0);
        assert_eq!(rest_count(&roster), 1);
    }

    #[test]
    fn test_converts_latest_rest_days_first() {
        let mut roster = create_roster(false, &[O, S, O, S, O, S, O, S, O, S, O]);
        assert_eq!(normalize_rest_days(&mut roster, 4), 2);
        assert_eq!(rest_count(&roster), 4);

        assert_eq!(roster.days[0].code, O);
        assert_eq!(roster.days[6].code, O);
        assert_ne!(roster.days[8].code, O);
        assert_ne!(roster.days[10].code, O);
    }

    #[test]
    fn test_night_follows_day_shift() {
        let mut roster = create_roster(false, &[O, O, O, O, S, O]);
        normalize_rest_days(&mut roster, 4);
        assert_eq!(roster.days[5].code, M);
        assert_eq!(roster.days[5].original_code, Some(O));
    }

    #[test]
    fn test_day_follows_night_shift() {
        let mut roster = create_roster(false, &[O, O, O, O, M, O]);
        normalize_rest_days(&mut roster, 4);
        assert_eq!(roster.days[5].code, S);
    }

    #[test]
    fn test_day_shift_after_leave() {
        let mut roster = create_roster(false, &[O, O, O, O, ShiftCode::AnnualLeave, O]);
        normalize_rest_days(&mut roster, 4);
        assert_eq!(roster.days[5].code, S);
    }

    #[test]
    fn test_first_day_defaults_to_day_shift() {
        let mut roster = create_roster(false, &[O, S, S]);
        normalize_rest_days(&mut roster, 0);
        assert_eq!(roster.days[0].code, S);
    }

    #[test]
    fn test_consecutive_rest_days_see_unconverted_predecessor() {
        // Walking backwards, day 5's predecessor (day 4) is still a rest day.
        let mut roster = create_roster(false, &[O, O, S, O, O, O]);
        normalize_rest_days(&mut roster, 3);
        assert_eq!(roster.days[5].code, S);
        assert_eq!(roster.days[4].code, S);
        assert_eq!(roster.days[3].code, O);
        assert_eq!(rest_count(&roster), 3);
    }

    #[test]
    fn test_fixed_rotation_always_day_shift() {
        let mut roster = create_roster(true, &[O, S, S, S, S, S, S, O, S, O, S, O, S, O]);
        normalize_rest_days(&mut roster, 4);
        assert_eq!(roster.days[13].code, S);
        assert!(!roster.days.iter().any(|d| d.code == M));
    }
}
