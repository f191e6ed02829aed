//! One roster cell: one staff member on one calendar day.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftCode;

/// The status of one staff member on one calendar day.
///
/// # Example
///
/// ```
/// use duty_roster::models::{DayStatus, ShiftCode};
/// use chrono::NaiveDate;
///
/// let mut day = DayStatus::new(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(), ShiftCode::DayShift);
/// day.substitute(ShiftCode::CarriedForwardHoliday);
///
/// assert_eq!(day.code, ShiftCode::CarriedForwardHoliday);
/// assert_eq!(day.original_code, Some(ShiftCode::DayShift));
/// assert_eq!(day.effective_code(), ShiftCode::DayShift);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    /// The calendar date.
    pub date: NaiveDate,
    /// Day of the week for `date`.
    pub day_of_week: Weekday,
    /// The displayed code.
    pub code: ShiftCode,
    /// The code this day held before its last substitution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_code: Option<ShiftCode>,
    /// Overtime hours credited for the day.
    pub overtime_hours: Decimal,
    /// Meal allowance credited for the day.
    pub meal_allowance: Decimal,
    /// True if the staff member works this day in place of a rest day.
    #[serde(default)]
    pub rest_day_overtime: bool,
}

impl DayStatus {
    /// Creates a fresh day holding `code` with nothing credited yet.
    pub fn new(date: NaiveDate, code: ShiftCode) -> Self {
        Self {
            date,
            day_of_week: date.weekday(),
            code,
            original_code: None,
            overtime_hours: Decimal::ZERO,
            meal_allowance: Decimal::ZERO,
            rest_day_overtime: false,
        }
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Calendar month (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns true on Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week, Weekday::Sat | Weekday::Sun)
    }

    /// The code used for aggregation.
    ///
    /// A carried-forward marker is unwrapped to the code it replaced; any
    /// other code is returned as displayed.
    pub fn effective_code(&self) -> ShiftCode {
        match (self.code, self.original_code) {
            (ShiftCode::CarriedForwardHoliday, Some(original)) => original,
            (code, _) => code,
        }
    }

    /// Returns true if the day counts as worked: a day or night shift, or a
    /// carried-forward marker over one.
    pub fn is_worked(&self) -> bool {
        self.code.is_working()
            || (self.code == ShiftCode::CarriedForwardHoliday && self.effective_code().is_working())
    }

    /// Replaces the displayed code, remembering the previous one.
    ///
    /// Substituting a code with itself leaves the day untouched so that
    /// `original_code` only appears on days whose code actually changed.
    pub fn substitute(&mut self, code: ShiftCode) {
        if self.code == code {
            return;
        }
        self.original_code = Some(self.code);
        self.code = code;
    }
}
