//! Trip catalog — the static list of scheduled trips.
//!
//! A round trip appears in the catalog as two trips to the same
//! destination: the outbound leg, which names its return leg through
//! [`Trip::return_departure`], and the return leg itself. Selections always
//! name the outbound leg; the return leg is resolved here.

use boarding_model::{Direction, Selection, Trip};
use chrono::NaiveDateTime;

use crate::error::BoardingError;

/// Read-only catalog of trips, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct TripCatalog {
    /// Trips ordered by departure, then destination.
    trips: Vec<Trip>,
}

impl TripCatalog {
    /// Build a catalog. Trips are ordered by departure, then destination.
    #[must_use]
    pub fn new(mut trips: Vec<Trip>) -> Self {
        trips.sort_by(|a, b| {
            a.departure
                .cmp(&b.departure)
                .then_with(|| a.destination.cmp(&b.destination))
        });
        Self { trips }
    }

    /// Returns all trips.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns the number of trips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Look up a trip by its identity.
    #[must_use]
    pub fn find(&self, destination: &str, departure: &NaiveDateTime) -> Option<&Trip> {
        self.trips
            .iter()
            .find(|t| t.destination == destination && t.departure == *departure)
    }

    /// The return leg of `outbound`: the trip its `return_departure`
    /// names. A trip without one, or naming a trip missing from the
    /// catalog, returns itself.
    #[must_use]
    pub fn return_leg<'a>(&'a self, outbound: &'a Trip) -> &'a Trip {
        outbound
            .return_departure
            .and_then(|departure| self.find(&outbound.destination, &departure))
            .unwrap_or(outbound)
    }

    /// Returns `true` if another trip names `trip` as its return leg.
    #[must_use]
    pub fn is_return_leg(&self, trip: &Trip) -> bool {
        self.trips.iter().any(|t| {
            t.destination == trip.destination
                && t.departure != trip.departure
                && t.return_departure == Some(trip.departure)
        })
    }

    /// Trips an operator may pick for `direction`. Both directions list
    /// outbound legs only, since they anchor the leg group; return selections
    /// are further limited to round-trip routes.
    #[must_use]
    pub fn choices(&self, direction: Direction) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|t| !self.is_return_leg(t))
            .filter(|t| direction == Direction::Outbound || t.is_round_trip())
            .collect()
    }

    /// The trip actually travelled for `direction` when `outbound` anchors
    /// the round trip.
    #[must_use]
    pub fn leg_trip<'a>(&'a self, outbound: &'a Trip, direction: Direction) -> &'a Trip {
        match direction {
            Direction::Outbound => outbound,
            Direction::Return => self.return_leg(outbound),
        }
    }

    /// Vehicles eligible for the leg a selection names.
    #[must_use]
    pub fn vehicles_for(&self, destination: &str, departure: &NaiveDateTime, direction: Direction) -> &[String] {
        self.find(destination, departure)
            .map(|outbound| self.leg_trip(outbound, direction).vehicles.as_slice())
            .unwrap_or_default()
    }

    /// Check that `selection` names a catalog trip and an eligible vehicle.
    ///
    /// Returns the trip travelled on the selected leg.
    ///
    /// # Errors
    ///
    /// Returns [`BoardingError::InvalidSelection`] for a blank destination or
    /// vehicle, an unknown trip, or a vehicle not eligible for the leg.
    pub fn validate(&self, selection: &Selection) -> Result<&Trip, BoardingError> {
        if selection.destination.trim().is_empty() {
            return Err(BoardingError::InvalidSelection(
                "destination is blank".to_string(),
            ));
        }
        if selection.vehicle.trim().is_empty() {
            return Err(BoardingError::InvalidSelection("vehicle is blank".to_string()));
        }

        let outbound = self
            .find(&selection.destination, &selection.departure)
            .ok_or_else(|| {
                BoardingError::InvalidSelection(format!(
                    "no trip {} in catalog",
                    selection.leg_group()
                ))
            })?;

        let leg = self.leg_trip(outbound, selection.direction);
        if !leg.has_vehicle(&selection.vehicle) {
            return Err(BoardingError::InvalidSelection(format!(
                "vehicle {} is not eligible for {} {}",
                selection.vehicle,
                selection.direction,
                selection.leg_group()
            )));
        }
        Ok(leg)
    }
}
