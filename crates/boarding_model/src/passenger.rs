//! Passenger check-in records.
//!
//! A [`PassengerRecord`] is one row per wristband, leg group and direction.
//! The same wristband shows up in many leg groups (different trips) and in
//! both directions of one leg group, always as distinct records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::trip::LegGroup;

/// Which leg of a round trip a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Outbound,
    Return,
}

impl Direction {
    /// Upper-case label used in boarding labels and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outbound => "OUTBOUND",
            Self::Return => "RETURN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OUTBOUND" => Ok(Self::Outbound),
            "RETURN" => Ok(Self::Return),
            other => Err(format!("unknown direction `{other}`, expected OUTBOUND or RETURN")),
        }
    }
}

/// Check-in state of a record. `Awaiting` is initial, `Boarded` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardingStatus {
    #[default]
    Awaiting,
    Boarded,
}

/// Composite key of a [`PassengerRecord`]. At most one record exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub wristband: String,
    pub leg_group: LegGroup,
    pub direction: Direction,
}

impl RecordKey {
    #[must_use]
    pub fn new(wristband: impl Into<String>, leg_group: LegGroup, direction: Direction) -> Self {
        Self {
            wristband: wristband.into(),
            leg_group,
            direction,
        }
    }

    /// The key of the same wristband and leg group in the other direction.
    #[must_use]
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({})", self.wristband, self.leg_group, self.direction)
    }
}

/// One passenger's attendance on one leg of one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    /// Durable passenger key, reused across legs and trips.
    pub wristband: String,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// The passenger's home route label.
    pub home_destination: String,
    /// Departure of the leg this record belongs to.
    #[serde(with = "crate::time::departure")]
    pub travel_at: NaiveDateTime,
    pub direction: Direction,
    pub leg_group: LegGroup,
    #[serde(default)]
    pub status: BoardingStatus,
    /// Vehicle the passenger boarded. Set only once boarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    /// Cosmetic summary of the boarding, e.g.
    /// `"OUTBOUND | BRASÍLIA → BASE (15/08/2024 08:00) [Ônibus 1]"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarded_label: Option<String>,
    /// Local time of boarding. Set only once boarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarded_at: Option<String>,
}

impl PassengerRecord {
    /// Returns this record's composite key.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.wristband.clone(), self.leg_group.clone(), self.direction)
    }

    #[must_use]
    pub fn is_boarded(&self) -> bool {
        self.status == BoardingStatus::Boarded
    }

    /// Build a fresh `Awaiting` record for `key`, copying guest identity
    /// (name, tax id, home destination) from `seed`.
    #[must_use]
    pub fn seeded_from(seed: &PassengerRecord, key: RecordKey, travel_at: NaiveDateTime) -> Self {
        Self {
            wristband: key.wristband,
            guest_name: seed.guest_name.clone(),
            tax_id: seed.tax_id.clone(),
            home_destination: seed.home_destination.clone(),
            travel_at,
            direction: key.direction,
            leg_group: key.leg_group,
            status: BoardingStatus::Awaiting,
            vehicle: None,
            boarded_label: None,
            boarded_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_departure;

    fn boarded_record() -> PassengerRecord {
        let at = parse_departure("2024-08-15 08:00").unwrap();
        PassengerRecord {
            wristband: "QR001".to_string(),
            guest_name: "Ana Silva".to_string(),
            tax_id: Some("111.111.111-11".to_string()),
            home_destination: "BRASÍLIA → BASE".to_string(),
            travel_at: at,
            direction: Direction::Outbound,
            leg_group: LegGroup::new("BRASÍLIA → BASE", &at),
            status: BoardingStatus::Boarded,
            vehicle: Some("Ônibus 1".to_string()),
            boarded_label: Some("OUTBOUND | BRASÍLIA → BASE (15/08/2024 08:00) [Ônibus 1]".to_string()),
            boarded_at: Some("15/08/2024 07:52:10".to_string()),
        }
    }

    #[test]
    fn test_direction_parse_and_display() {
        assert_eq!("return".parse::<Direction>().unwrap(), Direction::Return);
        assert_eq!(" OUTBOUND ".parse::<Direction>().unwrap(), Direction::Outbound);
        assert!("IDA".parse::<Direction>().is_err());
        assert_eq!(Direction::Return.to_string(), "RETURN");
    }

    #[test]
    fn test_key_with_direction() {
        let key = boarded_record().key();
        let other = key.with_direction(Direction::Return);
        assert_eq!(other.wristband, key.wristband);
        assert_eq!(other.leg_group, key.leg_group);
        assert_ne!(other, key);
    }

    #[test]
    fn test_seeded_from_copies_identity_only() {
        let seed = boarded_record();
        let at = parse_departure("2024-08-20 14:00").unwrap();
        let key = RecordKey::new("QR001", LegGroup::new("SÃO PAULO → HOTEL", &at), Direction::Outbound);
        let record = PassengerRecord::seeded_from(&seed, key.clone(), at);
        assert_eq!(record.key(), key);
        assert_eq!(record.guest_name, seed.guest_name);
        assert_eq!(record.tax_id, seed.tax_id);
        assert_eq!(record.home_destination, seed.home_destination);
        assert_eq!(record.status, BoardingStatus::Awaiting);
        assert!(record.vehicle.is_none());
        assert!(record.boarded_label.is_none());
        assert!(record.boarded_at.is_none());
    }

    #[test]
    fn test_awaiting_record_json_omits_boarding_fields() {
        let json = r#"{
            "wristband": "QR004",
            "guest_name": "Daniel Martins",
            "home_destination": "BRASÍLIA → BASE",
            "travel_at": "2024-08-15 08:00",
            "direction": "OUTBOUND",
            "leg_group": "BRASÍLIA → BASE :: 2024-08-15 08:00"
        }"#;
        let record: PassengerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, BoardingStatus::Awaiting);
        assert!(record.tax_id.is_none());
        let out = serde_json::to_string(&record).unwrap();
        assert!(!out.contains("boarded_label"));
        assert!(out.contains(r#""status":"AWAITING""#));
    }
}
