//! Payroll period model.
//!
//! A payroll period runs from the 26th of the previous month to the 25th of
//! the target month. This module validates the target year/month at the
//! boundary so the roster pipeline itself never has to.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Day of month on which a payroll period starts (in the previous month).
pub const PERIOD_START_DAY: u32 = 26;

/// Day of month on which a payroll period ends.
pub const PERIOD_END_DAY: u32 = 25;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A validated payroll period identified by its target year and month.
///
/// # Example
///
/// ```
/// use duty_roster::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod::new(2026, 3).unwrap();
/// assert_eq!(period.start_date(), NaiveDate::from_ymd_opt(2026, 2, 26).unwrap());
/// assert_eq!(period.end_date(), NaiveDate::from_ymd_opt(2026, 3, 25).unwrap());
/// assert_eq!(period.dates().len(), 28);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollPeriod {
    year: i32,
    month: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl PayrollPeriod {
    /// Creates the payroll period ending on the 25th of `month` in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if the month is outside 1-12
    /// or the period dates cannot be represented.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "month must be between 1 and 12".to_string(),
            });
        }

        let (start_year, start_month) = if month == 1 {
            (year.saturating_sub(1), 12)
        } else {
            (year, month - 1)
        };

        let start_date = NaiveDate::from_ymd_opt(start_year, start_month, PERIOD_START_DAY);
        let end_date = NaiveDate::from_ymd_opt(year, month, PERIOD_END_DAY);

        match (start_date, end_date) {
            (Some(start_date), Some(end_date)) => Ok(Self {
                year,
                month,
                start_date,
                end_date,
            }),
            _ => Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "period dates are out of range".to_string(),
            }),
        }
    }

    /// The target year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The target month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the period (inclusive).
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the period (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Every date in the period, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .collect()
    }

    /// Checks if a date falls within the period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of whole quarters between January of `epoch_year` and the
    /// target month.
    ///
    /// Months are counted zero-based from January of the epoch year and the
    /// division floors, so periods before the epoch get negative blocks.
    ///
    /// # Example
    ///
    /// ```
    /// use duty_roster::models::PayrollPeriod;
    ///
    /// assert_eq!(PayrollPeriod::new(2025, 3).unwrap().quarter_block(2025), 0);
    /// assert_eq!(PayrollPeriod::new(2025, 4).unwrap().quarter_block(2025), 1);
    /// assert_eq!(PayrollPeriod::new(2026, 1).unwrap().quarter_block(2025), 4);
    /// assert_eq!(PayrollPeriod::new(2024, 12).unwrap().quarter_block(2025), -1);
    /// ```
    pub fn quarter_block(&self, epoch_year: i32) -> i64 {
        let months_since_epoch =
            i64::from(self.year - epoch_year) * 12 + i64::from(self.month) - 1;
        months_since_epoch.div_euclid(3)
    }
}

/// Days elapsed since 1970-01-01 for a calendar date.
///
/// # Example
///
/// ```
/// use duty_roster::models::global_day_index;
/// use chrono::NaiveDate;
///
/// assert_eq!(global_day_index(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 0);
/// assert_eq!(global_day_index(NaiveDate::from_ymd_opt(1970, 1, 15).unwrap()), 14);
/// ```
pub fn global_day_index(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_spans_26th_to_25th() {
        let period = PayrollPeriod::new(2026, 6).unwrap();
        assert_eq!(period.start_date(), date(2026, 5, 26));
        assert_eq!(period.end_date(), date(2026, 6, 25));
        assert_eq!(period.dates().len(), 31);
    }

    #[test]
    fn test_january_period_starts_in_previous_year() {
        let period = PayrollPeriod::new(2026, 1).unwrap();
        assert_eq!(period.start_date(), date(2025, 12, 26));
        assert_eq!(period.end_date(), date(2026, 1, 25));
        assert_eq!(period.dates().len(), 31);
    }

    #[test]
    fn test_march_period_in_leap_year() {
        let period = PayrollPeriod::new(2028, 3).unwrap();
        assert_eq!(period.dates().len(), 29);
    }

    #[test]
    fn test_dates_are_consecutive() {
        let period = PayrollPeriod::new(2026, 9).unwrap();
        let dates = period.dates();
        assert_eq!(dates.first(), Some(&period.start_date()));
        assert_eq!(dates.last(), Some(&period.end_date()));
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_month_zero_is_rejected() {
        let result = PayrollPeriod::new(2026, 0);
        match result {
            Err(EngineError::InvalidPeriod { year, month, .. }) => {
                assert_eq!(year, 2026);
                assert_eq!(month, 0);
            }
            _ => panic!("Expected InvalidPeriod error"),
        }
    }

    #[test]
    fn test_month_thirteen_is_rejected() {
        assert!(PayrollPeriod::new(2026, 13).is_err());
    }

    #[test]
    fn test_unrepresentable_year_is_rejected() {
        assert!(PayrollPeriod::new(i32::MAX, 6).is_err());
    }

    #[test]
    fn test_contains_date_bounds() {
        let period = PayrollPeriod::new(2026, 2).unwrap();
        assert!(period.contains_date(date(2026, 1, 26)));
        assert!(period.contains_date(date(2026, 2, 25)));
        assert!(!period.contains_date(date(2026, 1, 25)));
        assert!(!period.contains_date(date(2026, 2, 26)));
    }

    #[test]
    fn test_quarter_block_transitions() {
        assert_eq!(PayrollPeriod::new(2025, 1).unwrap().quarter_block(2025), 0);
        assert_eq!(PayrollPeriod::new(2025, 3).unwrap().quarter_block(2025), 0);
        assert_eq!(PayrollPeriod::new(2025, 4).unwrap().quarter_block(2025), 1);
        assert_eq!(PayrollPeriod::new(2025, 12).unwrap().quarter_block(2025), 3);
        assert_eq!(PayrollPeriod::new(2026, 1).unwrap().quarter_block(2025), 4);
    }

    #[test]
    fn test_quarter_block_before_epoch_floors() {
        assert_eq!(PayrollPeriod::new(2024, 12).unwrap().quarter_block(2025), -1);
        assert_eq!(PayrollPeriod::new(2024, 10).unwrap().quarter_block(2025), -1);
        assert_eq!(PayrollPeriod::new(2024, 9).unwrap().quarter_block(2025), -2);
    }

    #[test]
    fn test_global_day_index() {
        assert_eq!(global_day_index(date(1970, 1, 1)), 0);
        assert_eq!(global_day_index(date(1969, 12, 31)), -1);
        assert_eq!(global_day_index(date(2026, 1, 1)), 20_454);
    }

    #[test]
    fn test_serialize_period() {
        let period = PayrollPeriod::new(2026, 2).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2026-01-26\""));
        assert!(json.contains("\"end_date\":\"2026-02-25\""));
    }
}
