//! Public holiday carry-forward.
//!
//! A public holiday that lands on a staff member's rest day is not lost:
//! the next working day is marked as a carried-forward holiday instead.

use crate::models::{HolidayCalendar, ShiftCode, StaffRoster};

/// Marks the working day after each rest day that falls on a public holiday.
///
/// The next day must be a day or night shift; leave, rest and marker codes
/// are left alone. The marked day keeps its previous code in
/// `original_code`. A marked day is never itself a rest day, so the effect
/// cannot cascade. A holiday on the last day of the period has no
/// following day and is ignored.
///
/// # Returns
///
/// The number of days marked.
///
/// # Example
///
/// ```
/// use duty_roster::calculation::carry_forward_holidays;
/// use duty_roster::models::{
///     DayStatus, HolidayCalendar, PublicHoliday, Rank, ShiftCode, Staff, StaffRoster,
/// };
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     month: 2,
///     day: 1,
///     name: "Thaipusam".to_string(),
/// }]);
/// let staff = Staff {
///     id: "S007".to_string(),
///     badge_number: "70007".to_string(),
///     rank: Rank::Constable,
///     name: "Constable Golf".to_string(),
///     call_sign: None,
///     vehicle: None,
///     fixed_rotation: false,
/// };
/// let mut roster = StaffRoster::new(
///     staff,
///     vec![
///         DayStatus::new(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), ShiftCode::Rest),
///         DayStatus::new(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(), ShiftCode::NightShift),
///     ],
/// );
///
/// assert_eq!(carry_forward_holidays(&mut roster, &calendar), 1);
/// assert_eq!(roster.days[1].code, ShiftCode::CarriedForwardHoliday);
/// assert_eq!(roster.days[1].original_code, Some(ShiftCode::NightShift));
/// ```
pub fn carry_forward_holidays(roster: &mut StaffRoster, calendar: &HolidayCalendar) -> usize {
    let mut marked = 0;

    for i in 1..roster.days.len() {
        let previous = &roster.days[i - 1];
        let triggers = previous.code == ShiftCode::Rest && calendar.is_holiday(previous.date);

        if triggers && roster.days[i].code.is_working() {
            roster.days[i].substitute(ShiftCode::CarriedForwardHoliday);
            marked += 1;
        }
    }

    marked
}
