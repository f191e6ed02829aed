//! Shift codes shown in each roster cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The code assigned to one staff member on one day.
///
/// Codes serialize as the short labels printed on the roster sheet
/// (`"S"`, `"M"`, `"O"`, ...).
///
/// # Example
///
/// ```
/// use duty_roster::models::ShiftCode;
///
/// assert!(ShiftCode::DayShift.is_working());
/// assert!(ShiftCode::AnnualLeave.is_leave());
/// assert_eq!(ShiftCode::CarriedForwardHoliday.to_string(), "CFPH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftCode {
    /// Day shift.
    #[serde(rename = "S")]
    DayShift,
    /// Night shift.
    #[serde(rename = "M")]
    NightShift,
    /// Rest day.
    #[serde(rename = "O")]
    Rest,
    /// Training course.
    #[serde(rename = "T")]
    Training,
    /// Annual leave.
    #[serde(rename = "AL")]
    AnnualLeave,
    /// Emergency leave.
    #[serde(rename = "CL")]
    EmergencyLeave,
    /// Sick leave.
    #[serde(rename = "EL")]
    SickLeave,
    /// Hospitalisation leave.
    #[serde(rename = "HL")]
    HospitalLeave,
    /// Maternity leave.
    #[serde(rename = "ML")]
    MaternityLeave,
    /// Paternity leave.
    #[serde(rename = "PL")]
    PaternityLeave,
    /// Public holiday taken off.
    #[serde(rename = "PH")]
    PublicHoliday,
    /// Rest-day overtime marker.
    #[serde(rename = "RDOT")]
    RestDayOvertime,
    /// Working day that absorbed a public holiday falling on a rest day.
    #[serde(rename = "CFPH")]
    CarriedForwardHoliday,
    /// Unaccounted for / absent without leave.
    #[serde(rename = "MIA")]
    Absent,
}

impl ShiftCode {
    /// Every code, in roster legend order.
    pub const ALL: [ShiftCode; 14] = [
        ShiftCode::DayShift,
        ShiftCode::NightShift,
        ShiftCode::Rest,
        ShiftCode::Training,
        ShiftCode::AnnualLeave,
        ShiftCode::EmergencyLeave,
        ShiftCode::SickLeave,
        ShiftCode::HospitalLeave,
        ShiftCode::MaternityLeave,
        ShiftCode::PaternityLeave,
        ShiftCode::PublicHoliday,
        ShiftCode::RestDayOvertime,
        ShiftCode::CarriedForwardHoliday,
        ShiftCode::Absent,
    ];

    /// The short label printed on the roster.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCode::DayShift => "S",
            ShiftCode::NightShift => "M",
            ShiftCode::Rest => "O",
            ShiftCode::Training => "T",
            ShiftCode::AnnualLeave => "AL",
            ShiftCode::EmergencyLeave => "CL",
            ShiftCode::SickLeave => "EL",
            ShiftCode::HospitalLeave => "HL",
            ShiftCode::MaternityLeave => "ML",
            ShiftCode::PaternityLeave => "PL",
            ShiftCode::PublicHoliday => "PH",
            ShiftCode::RestDayOvertime => "RDOT",
            ShiftCode::CarriedForwardHoliday => "CFPH",
            ShiftCode::Absent => "MIA",
        }
    }

    /// Returns true for the two rotating duty shifts (day and night).
    pub fn is_working(&self) -> bool {
        matches!(self, ShiftCode::DayShift | ShiftCode::NightShift)
    }

    /// Returns true for codes tallied as "leave" in daily strength.
    ///
    /// Training, public holiday and absence are counted with leave because
    /// the staff member is unavailable for duty either way.
    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            ShiftCode::AnnualLeave
                | ShiftCode::EmergencyLeave
                | ShiftCode::SickLeave
                | ShiftCode::HospitalLeave
                | ShiftCode::MaternityLeave
                | ShiftCode::PaternityLeave
                | ShiftCode::Training
                | ShiftCode::PublicHoliday
                | ShiftCode::Absent
        )
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_codes() {
        let working: Vec<ShiftCode> = ShiftCode::ALL
            .into_iter()
            .filter(ShiftCode::is_working)
            .collect();
        assert_eq!(working, vec![ShiftCode::DayShift, ShiftCode::NightShift]);
    }

    #[test]
    fn test_rest_and_markers_are_not_leave() {
        assert!(!ShiftCode::Rest.is_leave());
        assert!(!ShiftCode::DayShift.is_leave());
        assert!(!ShiftCode::NightShift.is_leave());
        assert!(!ShiftCode::CarriedForwardHoliday.is_leave());
        assert!(!ShiftCode::RestDayOvertime.is_leave());
    }

    #[test]
    fn test_leave_category_includes_training_and_absence() {
        assert!(ShiftCode::Training.is_leave());
        assert!(ShiftCode::Absent.is_leave());
        assert!(ShiftCode::PublicHoliday.is_leave());
        assert!(ShiftCode::HospitalLeave.is_leave());
    }

    #[test]
    fn test_serializes_as_short_label() {
        assert_eq!(serde_json::to_string(&ShiftCode::DayShift).unwrap(), "\"S\"");
        assert_eq!(
            serde_json::to_string(&ShiftCode::CarriedForwardHoliday).unwrap(),
            "\"CFPH\""
        );
        let code: ShiftCode = serde_json::from_str("\"MIA\"").unwrap();
        assert_eq!(code, ShiftCode::Absent);
    }

    #[test]
    fn test_display_matches_serde_label() {
        for code in ShiftCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code));
        }
    }

    #[test]
    fn test_unknown_label_fails_to_deserialize() {
        assert!(serde_json::from_str::<ShiftCode>("\"K\"").is_err());
        assert!(serde_json::from_str::<ShiftCode>("\"s\"").is_err());
    }
}
