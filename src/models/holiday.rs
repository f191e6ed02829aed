//! Public holiday calendar.
//!
//! The calendar is a static lookup keyed by (month, day), so one table
//! serves every payroll period that crosses a year boundary.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single public holiday entry.
///
/// # Example
///
/// ```
/// use duty_roster::models::PublicHoliday;
///
/// let holiday = PublicHoliday {
///     month: 8,
///     day: 31,
///     name: "Merdeka Day".to_string(),
/// };
/// assert_eq!(holiday.month, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// The holiday's name.
    pub name: String,
}

/// Read-only lookup from (month, day) to holiday name.
///
/// # Example
///
/// ```
/// use duty_roster::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     month: 12,
///     day: 25,
///     name: "Christmas Day".to_string(),
/// }]);
///
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// assert!(calendar.is_holiday(christmas));
/// assert_eq!(calendar.name(christmas), Some("Christmas Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PublicHoliday>", into = "Vec<PublicHoliday>")]
pub struct HolidayCalendar {
    holidays: HashMap<(u32, u32), String>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays.
    ///
    /// If two entries share a (month, day) key the later one wins.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        let holidays = holidays
            .into_iter()
            .map(|h| ((h.month, h.day), h.name))
            .collect();
        Self { holidays }
    }

    /// Returns the holiday name for a date, if any.
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .get(&(date.month(), date.day()))
            .map(String::as_str)
    }

    /// Checks whether a date is a listed public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&(date.month(), date.day()))
    }

    /// Number of entries in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar has no entries.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl From<Vec<PublicHoliday>> for HolidayCalendar {
    fn from(holidays: Vec<PublicHoliday>) -> Self {
        Self::new(holidays)
    }
}

impl From<HolidayCalendar> for Vec<PublicHoliday> {
    fn from(calendar: HolidayCalendar) -> Self {
        let mut holidays: Vec<PublicHoliday> = calendar
            .holidays
            .into_iter()
            .map(|((month, day), name)| PublicHoliday { month, day, name })
            .collect();
        holidays.sort_by_key(|h| (h.month, h.day));
        holidays
    }
}
