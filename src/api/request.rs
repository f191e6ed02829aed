//! Request types for the duty roster API.
//!
//! This module defines the JSON request structure for the `/roster` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{PayrollPeriod, RosterOverride, Staff};

/// Request body for the `/roster` endpoint.
///
/// Only the target year and month are required. When `staff` is omitted the
/// configured staff list is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Year of the period's end date.
    pub year: i32,
    /// Month of the period's end date (1-12).
    pub month: u32,
    /// Staff list to roster, in roster order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<Staff>>,
    /// Exceptions to apply on top of the rotation.
    #[serde(default)]
    pub overrides: Vec<RosterOverride>,
}

impl RosterRequest {
    /// Builds the payroll period named by the request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
    /// for an out-of-range month or unrepresentable year.
    pub fn period(&self) -> EngineResult<PayrollPeriod> {
        PayrollPeriod::new(self.year, self.month)
    }

    /// Checks the supplied staff list and every override.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a repeated staff id or a malformed
    /// override.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(staff) = &self.staff {
            ConfigLoader::check_unique_ids(staff)?;
        }
        self.overrides.iter().try_for_each(RosterOverride::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{OverrideKind, Rank, ShiftCode};
    use chrono::NaiveDate;

    fn create_staff(id: &str) -> Staff {
        Staff {
            id: id.to_string(),
            badge_number: "70001".to_string(),
            rank: Rank::Constable,
            name: "Constable".to_string(),
            call_sign: None,
            vehicle: None,
            fixed_rotation: false,
        }
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "year": 2026, "month": 2 }"#;
        let request: RosterRequest = serde_json::from_str(json).unwrap();
        assert_eq!((request.year, request.month), (2026, 2));
        assert!(request.staff.is_none());
        assert!(request.overrides.is_empty());
    }

    #[test]
    fn test_deserialize_request_with_overrides() {
        let json = r#"{
            "year": 2026,
            "month": 2,
            "overrides": [
                { "staff_id": "S003", "date": "2026-02-03", "type": "leave", "leave_code": "AL" },
                { "staff_id": "S004", "date": "2026-02-04", "type": "no_overtime", "category": "unplanned" }
            ]
        }"#;
        let request: RosterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.overrides.len(), 2);
        assert_eq!(
            request.overrides[0].kind,
            OverrideKind::Leave {
                leave_code: ShiftCode::AnnualLeave
            }
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_month() {
        let request = RosterRequest {
            year: 2026,
            month: 0,
            staff: None,
            overrides: Vec::new(),
        };
        assert!(matches!(
            request.period(),
            Err(EngineError::InvalidPeriod { month: 0, .. })
        ));
    }

    #[test]
    fn test_duplicate_staff_rejected() {
        let request = RosterRequest {
            year: 2026,
            month: 2,
            staff: Some(vec![create_staff("S001"), create_staff("S001")]),
            overrides: Vec::new(),
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::DuplicateStaff { id }) if id == "S001"
        ));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let request = RosterRequest {
            year: 2026,
            month: 2,
            staff: None,
            overrides: vec![RosterOverride::new(
                "S001",
                NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
                OverrideKind::Leave {
                    leave_code: ShiftCode::DayShift,
                },
            )],
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidOverride { .. })
        ));
    }
}
