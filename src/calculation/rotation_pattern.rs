//! Rotation pattern generation.
//!
//! This module derives the unmodified shift code for a staff member on each
//! day of a payroll period. Rotating staff follow a 14-day cycle offset by
//! their position on the staff list and drifted once per quarter; fixed
//! rotation staff work day shift with a single weekly rest day.

use chrono::{Datelike, NaiveDate};

use crate::models::{ShiftCode, Staff, global_day_index};

/// The 14-day base cycle: six day shifts, a rest day, six night shifts and
/// another rest day.
pub const BASE_PATTERN: [ShiftCode; 14] = [
    ShiftCode::DayShift,
    ShiftCode::DayShift,
    ShiftCode::DayShift,
    ShiftCode::DayShift,
    ShiftCode::DayShift,
    ShiftCode::DayShift,
    ShiftCode::Rest,
    ShiftCode::NightShift,
    ShiftCode::NightShift,
    ShiftCode::NightShift,
    ShiftCode::NightShift,
    ShiftCode::NightShift,
    ShiftCode::NightShift,
    ShiftCode::Rest,
];

/// Cycle positions each successive staff member is offset by.
pub const STAGGER_PER_STAFF: i64 = 2;

/// Index into [`BASE_PATTERN`] for a rotating staff member on one day.
///
/// Computes `(global_day_index + staff_index * 2 - quarter_block) mod 14`
/// with a non-negative result.
///
/// # Example
///
/// ```
/// use duty_roster::calculation::pattern_index;
///
/// assert_eq!(pattern_index(0, 0, 0), 0);
/// assert_eq!(pattern_index(0, 1, 0), 2);
/// assert_eq!(pattern_index(0, 0, 1), 13);
/// ```
pub fn pattern_index(global_day_index: i64, staff_index: usize, quarter_block: i64) -> usize {
    let cycle = BASE_PATTERN.len() as i64;
    let stagger_offset = staff_index as i64 * STAGGER_PER_STAFF;
    // rem_euclid keeps the result in 0..cycle, so the cast cannot truncate
    (global_day_index + stagger_offset - quarter_block).rem_euclid(cycle) as usize
}

/// The rotation code for one staff member on one date.
///
/// # Arguments
///
/// * `staff` - The staff member
/// * `staff_index` - Position of the staff member in the staff list
/// * `date` - The calendar date
/// * `quarter_block` - Quarters elapsed since the rotation epoch
///
/// # Example
///
/// ```
/// use duty_roster::calculation::rotation_code;
/// use duty_roster::models::{Rank, ShiftCode, Staff};
/// use chrono::NaiveDate;
///
/// let sergeant = Staff {
///     id: "S001".to_string(),
///     badge_number: "70001".to_string(),
///     rank: Rank::Sergeant,
///     name: "Sergeant Alpha".to_string(),
///     call_sign: None,
///     vehicle: None,
///     fixed_rotation: true,
/// };
///
/// // 2026-01-31 is a Saturday, the sergeant's fixed rest day
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(rotation_code(&sergeant, 0, saturday, 4), ShiftCode::Rest);
///
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
/// assert_eq!(rotation_code(&sergeant, 0, monday, 4), ShiftCode::DayShift);
/// ```
pub fn rotation_code(
    staff: &Staff,
    staff_index: usize,
    date: NaiveDate,
    quarter_block: i64,
) -> ShiftCode {
    match staff.fixed_rest_day() {
        Some(rest_day) if date.weekday() == rest_day => ShiftCode::Rest,
        Some(_) => ShiftCode::DayShift,
        None => {
            let index = pattern_index(global_day_index(date), staff_index, quarter_block);
            BASE_PATTERN[index]
        }
    }
}

/// Generates one rotation code per date for a staff member.
pub fn generate_pattern(
    staff: &Staff,
    staff_index: usize,
    dates: &[NaiveDate],
    quarter_block: i64,
) -> Vec<ShiftCode> {
    dates
        .iter()
        .map(|date| rotation_code(staff, staff_index, *date, quarter_block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayrollPeriod, Rank};
    use chrono::Weekday;

    fn create_staff(rank: Rank, fixed_rotation: bool) -> Staff {
        Staff {
            id: "S003".to_string(),
            badge_number: "70003".to_string(),
            rank,
            name: "Constable Charlie".to_string(),
            call_sign: None,
            vehicle: None,
            fixed_rotation,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_base_pattern_shape() {
        let days = BASE_PATTERN.iter().filter(|c| **c == ShiftCode::DayShift).count();
        let nights = BASE_PATTERN.iter().filter(|c| **c == ShiftCode::NightShift).count();
        let rests = BASE_PATTERN.iter().filter(|c| **c == ShiftCode::Rest).count();
        assert_eq!((days, nights, rests), (6, 6, 2));
        assert_eq!(BASE_PATTERN[6], ShiftCode::Rest);
        assert_eq!(BASE_PATTERN[13], ShiftCode::Rest);
    }

    #[test]
    fn test_pattern_index_wraps_negative() {
        assert_eq!(pattern_index(-1, 0, 0), 13);
        assert_eq!(pattern_index(0, 0, 15), 13);
        assert_eq!(pattern_index(3, 0, 4), 13);
    }

    #[test]
    fn test_pattern_index_stagger() {
        assert_eq!(pattern_index(0, 3, 0), 6);
        assert_eq!(pattern_index(0, 7, 0), 0);
    }

    #[test]
    fn test_rotating_staff_follows_cycle_from_new_year_2026() {
        // 2026-01-01 is day 20454 since the Unix epoch, a multiple of 14.
        let staff = create_staff(Rank::Constable, false);
        let dates: Vec<NaiveDate> = date(2026, 1, 1).iter_days().take(14).collect();
        let codes = generate_pattern(&staff, 0, &dates, 0);
        assert_eq!(codes, BASE_PATTERN.to_vec());
    }

    #[test]
    fn test_stagger_shifts_cycle_by_two_days() {
        let staff = create_staff(Rank::Constable, false);
        let dates: Vec<NaiveDate> = date(2026, 1, 1).iter_days().take(14).collect();
        let first = generate_pattern(&staff, 0, &dates, 0);
        let second = generate_pattern(&staff, 1, &dates, 0);
        for i in 0..12 {
            assert_eq!(second[i], first[i + 2]);
        }
    }

    #[test]
    fn test_quarter_drift_delays_cycle_by_one_day() {
        let staff = create_staff(Rank::Constable, false);
        let dates: Vec<NaiveDate> = date(2026, 1, 1).iter_days().take(15).collect();
        let q0 = generate_pattern(&staff, 0, &dates, 0);
        let q1 = generate_pattern(&staff, 0, &dates, 1);
        for i in 0..14 {
            assert_eq!(q1[i + 1], q0[i]);
        }
    }

    #[test]
    fn test_drift_across_quarter_transition() {
        // March 2026 is quarter block 4, April 2026 is quarter block 5.
        let march = PayrollPeriod::new(2026, 3).unwrap().quarter_block(2025);
        let april = PayrollPeriod::new(2026, 4).unwrap().quarter_block(2025);
        assert_eq!((march, april), (4, 5));

        let staff = create_staff(Rank::Constable, false);
        let day = date(2026, 3, 26);
        let index_march = pattern_index(global_day_index(day), 2, march);
        let index_april = pattern_index(global_day_index(day), 2, april);
        assert_eq!((index_march + 13) % 14, index_april);
        assert_eq!(rotation_code(&staff, 2, day, april), BASE_PATTERN[index_april]);
    }

    #[test]
    fn test_drift_across_year_transition() {
        let december = PayrollPeriod::new(2025, 12).unwrap().quarter_block(2025);
        let january = PayrollPeriod::new(2026, 1).unwrap().quarter_block(2025);
        assert_eq!((december, january), (3, 4));

        // The January period starts on 2025-12-26, the day after December's ends.
        let day = date(2025, 12, 26);
        let index = pattern_index(global_day_index(day), 0, january);
        // 2025-12-26 is six days before 2026-01-01 (index 0 at block 0).
        assert_eq!(index, (14 - 6 - 4) as usize);
    }

    #[test]
    fn test_fixed_constable_rests_on_sunday_only() {
        let staff = create_staff(Rank::Constable, true);
        let dates: Vec<NaiveDate> = date(2026, 1, 26).iter_days().take(31).collect();
        let codes = generate_pattern(&staff, 5, &dates, 4);
        for (d, code) in dates.iter().zip(&codes) {
            if d.weekday() == Weekday::Sun {
                assert_eq!(*code, ShiftCode::Rest);
            } else {
                assert_eq!(*code, ShiftCode::DayShift);
            }
        }
    }

    #[test]
    fn test_fixed_staff_never_night_regardless_of_quarter() {
        let staff = create_staff(Rank::Sergeant, true);
        let dates: Vec<NaiveDate> = date(2025, 1, 1).iter_days().take(400).collect();
        for quarter in -3..10 {
            let codes = generate_pattern(&staff, 0, &dates, quarter);
            assert!(!codes.contains(&ShiftCode::NightShift));
        }
    }

    #[test]
    fn test_generate_pattern_is_deterministic() {
        let staff = create_staff(Rank::Corporal, false);
        let dates = PayrollPeriod::new(2026, 7).unwrap().dates();
        assert_eq!(
            generate_pattern(&staff, 1, &dates, 6),
            generate_pattern(&staff, 1, &dates, 6)
        );
    }
}
