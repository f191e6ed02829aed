//! Payroll calculation.
//!
//! This module credits overtime hours and meal allowance to each day of a
//! finished roster, then aggregates the per-staff summary and raises
//! long-streak and low-rest conflicts.

use rust_decimal::Decimal;

use crate::config::RosterRules;
use crate::models::{
    Conflict, DayStatus, HolidayCalendar, OverrideKind, RosterOverride, RosterSummary, ShiftCode,
    StaffRoster,
};

/// Overtime hours and meal allowance credited for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPay {
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Meal allowance.
    pub meal_allowance: Decimal,
}

impl DayPay {
    /// Nothing credited.
    pub const ZERO: DayPay = DayPay {
        overtime_hours: Decimal::ZERO,
        meal_allowance: Decimal::ZERO,
    };
}

/// Calculates the pay credited for a single day.
///
/// | Code | Overtime | Meal |
/// |------|----------|------|
/// | `S` on Saturday or Sunday | per shift | weekend day rate |
/// | `S` on a weekday | per shift | standard |
/// | `M` | per shift | standard |
/// | `CFPH` over a worked shift | per shift | standard |
/// | anything else | 0 | 0 |
///
/// A day under a no-overtime request earns nothing regardless of its code.
///
/// # Example
///
/// ```
/// use duty_roster::calculation::day_pay;
/// use duty_roster::config::RosterRules;
/// use duty_roster::models::{DayStatus, ShiftCode};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = RosterRules::default();
/// // 2026-01-31 is a Saturday
/// let day = DayStatus::new(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(), ShiftCode::DayShift);
///
/// let pay = day_pay(&day, false, &rules);
/// assert_eq!(pay.overtime_hours, Decimal::from(4));
/// assert_eq!(pay.meal_allowance, Decimal::from(20));
///
/// assert_eq!(day_pay(&day, true, &rules).meal_allowance, Decimal::ZERO);
/// ```
pub fn day_pay(day: &DayStatus, no_overtime: bool, rules: &RosterRules) -> DayPay {
    if no_overtime {
        return DayPay::ZERO;
    }

    let meal_allowance = match day.code {
        ShiftCode::DayShift if day.is_weekend() => rules.weekend_day_meal,
        ShiftCode::DayShift | ShiftCode::NightShift => rules.standard_meal,
        ShiftCode::CarriedForwardHoliday if day.is_worked() => rules.standard_meal,
        _ => return DayPay::ZERO,
    };

    DayPay {
        overtime_hours: rules.overtime_hours_per_shift,
        meal_allowance,
    }
}

/// Credits every day of a roster and rebuilds its summary.
///
/// Any previous summary is replaced. `LongStreak` is raised once if the
/// roster contains a run of worked days longer than
/// `rules.long_streak_threshold`, and `LowRest` if the roster has fewer
/// than `rules.min_rest_days` rest days.
pub fn calculate_payroll(
    roster: &mut StaffRoster,
    overrides: &[RosterOverride],
    calendar: &HolidayCalendar,
    rules: &RosterRules,
) {
    let staff_id = roster.staff.id.clone();
    let mut summary = RosterSummary::default();
    let mut streak = 0u32;
    let mut longest_streak = 0u32;

    for day in roster.days.iter_mut() {
        let no_overtime = overrides
            .iter()
            .any(|o| o.kind == OverrideKind::NoOvertime && o.matches(&staff_id, day.date));

        let pay = day_pay(day, no_overtime, rules);
        day.overtime_hours = pay.overtime_hours;
        day.meal_allowance = pay.meal_allowance;

        summary.overtime_hours += pay.overtime_hours;
        summary.meal_allowance += pay.meal_allowance;

        let worked = day.is_worked();
        if worked {
            summary.workdays += 1;
            streak += 1;
            longest_streak = longest_streak.max(streak);
            if calendar.is_holiday(day.date) {
                summary.public_holidays += 1;
            }
        } else {
            streak = 0;
        }

        match day.code {
            ShiftCode::Rest => summary.restdays += 1,
            ShiftCode::CarriedForwardHoliday => summary.carried_forward += 1,
            _ => {}
        }
        if day.rest_day_overtime {
            summary.rest_day_overtime += 1;
        }
    }

    roster.summary = summary;

    if longest_streak > rules.long_streak_threshold {
        roster.push_conflict(Conflict::LongStreak {
            threshold: rules.long_streak_threshold,
        });
    }
    if roster.summary.restdays < rules.min_rest_days {
        roster.push_conflict(Conflict::LowRest {
            minimum: rules.min_rest_days,
        });
    }
}
