//! Scheduled trips and the leg-group pairing key.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time;

/// Marker separating origin and destination in a round-trip route label.
pub const ROUTE_ARROW: char = '→';

/// A scheduled trip, identified by its destination and departure.
///
/// Trips are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Route label, e.g. `"BRASÍLIA → BASE"`.
    pub destination: String,
    /// Local departure time.
    #[serde(with = "crate::time::departure")]
    pub departure: NaiveDateTime,
    /// Vehicles eligible for this trip. Unique, no implied order.
    pub vehicles: Vec<String>,
    /// Departure of the trip to the same destination that brings this
    /// trip's passengers back. `None` when the trip has no separate return
    /// leg.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::optional_departure"
    )]
    pub return_departure: Option<NaiveDateTime>,
}

impl Trip {
    /// Create a trip. Duplicate vehicle identifiers are dropped, keeping the
    /// first occurrence.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        departure: NaiveDateTime,
        vehicles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for vehicle in vehicles {
            let vehicle = vehicle.into();
            if !unique.contains(&vehicle) {
                unique.push(vehicle);
            }
        }
        Self {
            destination: destination.into(),
            departure,
            vehicles: unique,
            return_departure: None,
        }
    }

    /// Pair this trip with the return leg departing at `departure`.
    #[must_use]
    pub fn with_return(mut self, departure: NaiveDateTime) -> Self {
        self.return_departure = Some(departure);
        self
    }

    /// Returns `true` if `vehicle` may board this trip.
    #[must_use]
    pub fn has_vehicle(&self, vehicle: &str) -> bool {
        self.vehicles.iter().any(|v| v == vehicle)
    }

    /// Returns `true` if the route label describes a there-and-back route.
    #[must_use]
    pub fn is_round_trip(&self) -> bool {
        self.destination.contains(ROUTE_ARROW)
    }

    /// The leg group anchored on this trip's departure.
    #[must_use]
    pub fn leg_group(&self) -> LegGroup {
        LegGroup::new(&self.destination, &self.departure)
    }
}

/// Pairing key shared by the outbound and return legs of one round trip:
/// `"<destination> :: <outbound departure>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegGroup(String);

impl LegGroup {
    /// Separator between the destination and the departure.
    pub const SEPARATOR: &'static str = " :: ";

    /// Build the leg group for a destination and its outbound departure.
    #[must_use]
    pub fn new(destination: &str, outbound_departure: &NaiveDateTime) -> Self {
        Self(format!(
            "{destination}{}{}",
            Self::SEPARATOR,
            time::format_departure(outbound_departure)
        ))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_departure;

    #[test]
    fn test_leg_group_format() {
        let at = parse_departure("2024-08-15 08:00").unwrap();
        let group = LegGroup::new("BRASÍLIA → BASE", &at);
        assert_eq!(group.as_str(), "BRASÍLIA → BASE :: 2024-08-15 08:00");
        assert_eq!(group.to_string(), group.as_str());
    }

    #[test]
    fn test_trip_dedups_vehicles() {
        let at = parse_departure("2024-08-15 08:00").unwrap();
        let trip = Trip::new("BRASÍLIA → BASE", at, ["Ônibus 1", "Ônibus 2", "Ônibus 1"]);
        assert_eq!(trip.vehicles, vec!["Ônibus 1", "Ônibus 2"]);
        assert!(trip.has_vehicle("Ônibus 2"));
        assert!(!trip.has_vehicle("Van 1"));
    }

    #[test]
    fn test_round_trip_detection() {
        let at = parse_departure("2024-08-20 14:00").unwrap();
        assert!(Trip::new("SÃO PAULO → HOTEL", at, ["A"]).is_round_trip());
        assert!(!Trip::new("AEROPORTO", at, ["A"]).is_round_trip());
    }

    #[test]
    fn test_trip_json_shape() {
        let json = r#"{"destination":"BRASÍLIA → BASE","departure":"2024-08-15 08:00","vehicles":["Ônibus 1"]}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.leg_group().as_str(), "BRASÍLIA → BASE :: 2024-08-15 08:00");
        assert_eq!(trip.return_departure, None);
        assert_eq!(serde_json::to_string(&trip).unwrap(), json);
    }

    #[test]
    fn test_trip_json_with_return_departure() {
        let json = r#"{"destination":"BRASÍLIA → BASE","departure":"2024-08-15 08:00","vehicles":["Ônibus 1"],"return_departure":"2024-08-15 18:00"}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.return_departure, Some(parse_departure("2024-08-15 18:00").unwrap()));
        assert_eq!(serde_json::to_string(&trip).unwrap(), json);
    }
}
