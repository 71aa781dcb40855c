//! Seed documents.
//!
//! A seed is a JSON document listing the trip catalog, the passengers
//! registered so far and, optionally, the known operators:
//!
//! ```json
//! {
//!   "trips": [{ "destination": "BRASÍLIA → BASE", "departure": "2024-08-15 08:00", "vehicles": ["Ônibus 1"],
//!               "return_departure": "2024-08-15 18:00" },
//!             { "destination": "BRASÍLIA → BASE", "departure": "2024-08-15 18:00", "vehicles": ["Ônibus 1"] }],
//!   "passengers": [{ "wristband": "QR001", "guest_name": "Ana Silva", "home_destination": "BRASÍLIA → BASE",
//!                    "travel_at": "2024-08-15 08:00", "direction": "OUTBOUND",
//!                    "leg_group": "BRASÍLIA → BASE :: 2024-08-15 08:00" }],
//!   "operators": [{ "name": "Fiscal A" }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use boarding_model::time::format_departure;
use boarding_model::{Operator, PassengerRecord, Trip};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::TripCatalog;
use crate::error::SeedError;
use crate::store::{MemoryStore, RecordStore};

/// Trips, passengers and operators to start an engine with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub passengers: Vec<PassengerRecord>,
    #[serde(default)]
    pub operators: Vec<Operator>,
}

impl SeedDocument {
    /// Decode a seed document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Decode`] if the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and decode the seed document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the file cannot be read, or
    /// [`SeedError::Decode`] if it is not a valid document.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            trips = seed.trips.len(),
            passengers = seed.passengers.len(),
            operators = seed.operators.len(),
            "seed document loaded"
        );
        Ok(seed)
    }

    /// Look up an operator by name, ignoring case.
    #[must_use]
    pub fn operator(&self, name: &str) -> Option<&Operator> {
        self.operators
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Build the trip catalog and record store from this document.
    ///
    /// # Errors
    ///
    /// - [`SeedError::InvalidTrip`] for a trip with a blank destination, no
    ///   vehicles, the same identity as another trip, or a
    ///   `return_departure` that names no later trip to its destination.
    /// - [`SeedError::DuplicateRecord`] if two passengers share a key.
    pub fn into_parts(self) -> Result<(TripCatalog, MemoryStore), SeedError> {
        let mut seen_trips = HashSet::new();
        for trip in &self.trips {
            if trip.destination.trim().is_empty() {
                return Err(SeedError::InvalidTrip(format!(
                    "blank destination at {}",
                    trip.departure
                )));
            }
            if trip.vehicles.is_empty() {
                return Err(SeedError::InvalidTrip(format!("{} has no vehicles", trip.leg_group())));
            }
            if !seen_trips.insert(trip.leg_group()) {
                return Err(SeedError::InvalidTrip(format!("{} listed twice", trip.leg_group())));
            }
        }
        for trip in &self.trips {
            let Some(back) = trip.return_departure else {
                continue;
            };
            let paired = back > trip.departure
                && self
                    .trips
                    .iter()
                    .any(|t| t.destination == trip.destination && t.departure == back);
            if !paired {
                return Err(SeedError::InvalidTrip(format!(
                    "{} returns at {}, which is not a later trip to the same destination",
                    trip.leg_group(),
                    format_departure(&back)
                )));
            }
        }

        let store = MemoryStore::new();
        for record in self.passengers {
            let key = record.key();
            let (_, inserted) = store.insert_if_absent(record);
            if !inserted {
                return Err(SeedError::DuplicateRecord(key));
            }
        }

        let catalog = TripCatalog::new(self.trips.into_iter().map(dedup_vehicles).collect());
        Ok((catalog, store))
    }
}

fn dedup_vehicles(trip: Trip) -> Trip {
    let back = trip.return_departure;
    let deduped = Trip::new(trip.destination, trip.departure, trip.vehicles);
    match back {
        Some(departure) => deduped.with_return(departure),
        None => deduped,
    }
}

#[cfg(test)]
mod tests {
    use boarding_model::Direction;

    use super::*;

    const SEED: &str = r#"{
        "trips": [
            { "destination": "BRASÍLIA → BASE", "departure": "2024-08-15 08:00", "vehicles": ["Ônibus 1", "Ônibus 1"],
              "return_departure": "2024-08-15 18:00" },
            { "destination": "BRASÍLIA → BASE", "departure": "2024-08-15 18:00", "vehicles": ["Van 1"] }
        ],
        "passengers": [
            { "wristband": "QR001", "guest_name": "Ana Silva", "tax_id": "111.111.111-11",
              "home_destination": "BRASÍLIA → BASE", "travel_at": "2024-08-15 08:00",
              "direction": "OUTBOUND", "leg_group": "BRASÍLIA → BASE :: 2024-08-15 08:00" },
            { "wristband": "QR001", "guest_name": "Ana Silva", "tax_id": "111.111.111-11",
              "home_destination": "BRASÍLIA → BASE", "travel_at": "2024-08-15 18:00",
              "direction": "RETURN", "leg_group": "BRASÍLIA → BASE :: 2024-08-15 08:00" }
        ],
        "operators": [{ "name": "Fiscal A" }]
    }"#;

    #[test]
    fn test_seed_into_parts() {
        let seed = SeedDocument::from_json(SEED).unwrap();
        assert!(seed.operator("fiscal a").is_some());
        assert!(seed.operator("Fiscal Z").is_none());

        let (catalog, store) = seed.into_parts().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.trips()[0].vehicles, vec!["Ônibus 1"]);
        let back = catalog.return_leg(&catalog.trips()[0]);
        assert_eq!(back.vehicles, vec!["Van 1"]);
        assert!(!catalog.choices(Direction::Outbound).contains(&back));
        assert_eq!(store.len(), 2);
        let record = store.find_any_for_wristband("QR001").unwrap();
        assert_eq!(record.direction, Direction::Return);
    }

    #[test]
    fn test_seed_rejects_duplicate_records() {
        let mut seed = SeedDocument::from_json(SEED).unwrap();
        let duplicate = seed.passengers[0].clone();
        seed.passengers.push(duplicate);
        assert!(matches!(seed.into_parts(), Err(SeedError::DuplicateRecord(_))));
    }

    #[test]
    fn test_seed_rejects_trip_without_vehicles() {
        let mut seed = SeedDocument::from_json(SEED).unwrap();
        seed.trips[0].vehicles.clear();
        assert!(matches!(seed.into_parts(), Err(SeedError::InvalidTrip(_))));
    }

    #[test]
    fn test_seed_rejects_unknown_return_departure() {
        let mut seed = SeedDocument::from_json(SEED).unwrap();
        seed.trips[0].return_departure = seed.trips[0].departure.checked_add_signed(chrono::TimeDelta::hours(1));
        assert!(matches!(seed.into_parts(), Err(SeedError::InvalidTrip(_))));

        let mut seed = SeedDocument::from_json(SEED).unwrap();
        seed.trips[1].return_departure = Some(seed.trips[0].departure);
        assert!(matches!(seed.into_parts(), Err(SeedError::InvalidTrip(_))));
    }

    #[test]
    fn test_seed_rejects_bad_json() {
        assert!(matches!(
            SeedDocument::from_json(r#"{ "trips": [{ "destination": "X", "departure": "15/08/2024" }] }"#),
            Err(SeedError::Decode(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SeedDocument::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
