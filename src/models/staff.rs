//! Staff model and rank types.
//!
//! This module defines the [`Staff`] record and [`Rank`] enum for the
//! officers who appear on the roster.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Rank of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Sergeant, the senior rank on the unit.
    Sergeant,
    /// Corporal.
    Corporal,
    /// Constable.
    Constable,
}

impl Rank {
    /// Returns true if this rank can supervise a shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_roster::models::Rank;
    ///
    /// assert!(Rank::Sergeant.is_supervisory());
    /// assert!(Rank::Corporal.is_supervisory());
    /// assert!(!Rank::Constable.is_supervisory());
    /// ```
    pub fn is_supervisory(&self) -> bool {
        matches!(self, Rank::Sergeant | Rank::Corporal)
    }
}

/// A staff member on the roster.
///
/// The engine only reads staff records; they are supplied wholesale by the
/// caller on every generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Badge number shown on printed rosters.
    pub badge_number: String,
    /// The staff member's rank.
    pub rank: Rank,
    /// Display name.
    pub name: String,
    /// Radio call sign (e.g., "N03").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sign: Option<String>,
    /// Patrol vehicle registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    /// Staff restricted to day shift with one fixed weekly rest day.
    #[serde(default)]
    pub fixed_rotation: bool,
}

impl Staff {
    /// The fixed weekly rest day of a fixed-rotation staff member.
    ///
    /// Sergeants rest on Saturday, everyone else on Sunday. Rotating staff
    /// have no fixed rest day and return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_roster::models::{Rank, Staff};
    /// use chrono::Weekday;
    ///
    /// let sergeant = Staff {
    ///     id: "101544".to_string(),
    ///     badge_number: "74722".to_string(),
    ///     rank: Rank::Sergeant,
    ///     name: "Sergeant Alpha".to_string(),
    ///     call_sign: Some("N01".to_string()),
    ///     vehicle: None,
    ///     fixed_rotation: true,
    /// };
    /// assert_eq!(sergeant.fixed_rest_day(), Some(Weekday::Sat));
    /// ```
    pub fn fixed_rest_day(&self) -> Option<Weekday> {
        if !self.fixed_rotation {
            return None;
        }
        match self.rank {
            Rank::Sergeant => Some(Weekday::Sat),
            Rank::Corporal | Rank::Constable => Some(Weekday::Sun),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_staff(rank: Rank, fixed_rotation: bool) -> Staff {
        Staff {
            id: "101159".to_string(),
            badge_number: "48805".to_string(),
            rank,
            name: "Ahmad Zaki".to_string(),
            call_sign: Some("N03".to_string()),
            vehicle: Some("WB 2552 T".to_string()),
            fixed_rotation,
        }
    }

    #[test]
    fn test_deserialize_staff_with_optional_fields() {
        let json = r#"{
            "id": "101695",
            "badge_number": "83185",
            "rank": "constable",
            "name": "Asrul"
        }"#;

        let staff: Staff = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "101695");
        assert_eq!(staff.rank, Rank::Constable);
        assert_eq!(staff.call_sign, None);
        assert_eq!(staff.vehicle, None);
        assert!(!staff.fixed_rotation);
    }

    #[test]
    fn test_deserialize_fixed_rotation_staff() {
        let json = r#"{
            "id": "101787",
            "badge_number": "7835",
            "rank": "constable",
            "name": "Noorazreena",
            "call_sign": "N08",
            "fixed_rotation": true
        }"#;

        let staff: Staff = serde_json::from_str(json).unwrap();
        assert!(staff.fixed_rotation);
        assert_eq!(staff.call_sign.as_deref(), Some("N08"));
        assert_eq!(staff.fixed_rest_day(), Some(Weekday::Sun));
    }

    #[test]
    fn test_serialize_skips_missing_optionals() {
        let mut staff = create_test_staff(Rank::Constable, false);
        staff.call_sign = None;
        staff.vehicle = None;

        let json = serde_json::to_string(&staff).unwrap();
        assert!(!json.contains("call_sign"));
        assert!(!json.contains("vehicle"));
        assert!(json.contains("\"rank\":\"constable\""));
    }

    #[test]
    fn test_rotating_staff_has_no_fixed_rest_day() {
        let staff = create_test_staff(Rank::Sergeant, false);
        assert_eq!(staff.fixed_rest_day(), None);
    }

    #[test]
    fn test_fixed_sergeant_rests_on_saturday() {
        let staff = create_test_staff(Rank::Sergeant, true);
        assert_eq!(staff.fixed_rest_day(), Some(Weekday::Sat));
    }

    #[test]
    fn test_fixed_corporal_rests_on_sunday() {
        let staff = create_test_staff(Rank::Corporal, true);
        assert_eq!(staff.fixed_rest_day(), Some(Weekday::Sun));
    }

    #[test]
    fn test_rank_serialization() {
        assert_eq!(serde_json::to_string(&Rank::Sergeant).unwrap(), "\"sergeant\"");
        assert_eq!(serde_json::to_string(&Rank::Corporal).unwrap(), "\"corporal\"");
        assert_eq!(serde_json::to_string(&Rank::Constable).unwrap(), "\"constable\"");
    }
}
