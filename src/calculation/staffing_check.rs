//! Minimum staffing check.

use crate::config::StaffingThresholds;
use crate::models::{DailyStrength, ShortfallKind, StaffingShortfall};

/// Compares each day's strength against the minimum staffing thresholds.
///
/// Returns one shortfall per failed rule per day, in date order. A missing
/// senior is reported with `required = 1` and `actual = 0`, and only when
/// `thresholds.require_senior` is set.
///
/// # Example
///
/// ```
/// use duty_roster::calculation::check_staffing;
/// use duty_roster::config::StaffingThresholds;
/// use duty_roster::models::{DailyStrength, ShortfallKind};
/// use chrono::NaiveDate;
///
/// let strength = DailyStrength {
///     date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     day_shift: 3,
///     night_shift: 2,
///     off: 2,
///     leave: 1,
///     senior_on_duty: true,
/// };
///
/// let shortfalls = check_staffing(&[strength], &StaffingThresholds::default());
/// assert_eq!(shortfalls.len(), 1);
/// assert_eq!(shortfalls[0].kind, ShortfallKind::NightShift);
/// assert_eq!((shortfalls[0].required, shortfalls[0].actual), (3, 2));
/// ```
pub fn check_staffing(
    strength: &[DailyStrength],
    thresholds: &StaffingThresholds,
) -> Vec<StaffingShortfall> {
    let mut shortfalls = Vec::new();

    for day in strength {
        let counts = [
            (ShortfallKind::DayShift, thresholds.min_day_shift, day.day_shift),
            (ShortfallKind::NightShift, thresholds.min_night_shift, day.night_shift),
            (ShortfallKind::Off, thresholds.min_off, day.off),
        ];
        for (kind, required, actual) in counts {
            if actual < required {
                shortfalls.push(StaffingShortfall {
                    date: day.date,
                    kind,
                    required,
                    actual,
                });
            }
        }

        if thresholds.require_senior && !day.senior_on_duty {
            shortfalls.push(StaffingShortfall {
                date: day.date,
                kind: ShortfallKind::NoSenior,
                required: 1,
                actual: 0,
            });
        }
    }

    shortfalls
}
