//! Derived dashboard aggregates.

use serde::{Deserialize, Serialize};

use crate::passenger::PassengerRecord;
use crate::selection::Selection;

/// Boarded/expected counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub boarded: usize,
    pub total: usize,
    /// Outbound boarders not yet back. Return legs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<usize>,
}

/// Counts for one eligible vehicle. `stats.total` is always 0: there is no
/// per-vehicle capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStats {
    pub vehicle: String,
    pub stats: Stats,
}

/// Point-in-time boarding state for a selection. Computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selection: Selection,
    pub overall: Stats,
    /// One entry per eligible vehicle, in catalog order.
    pub vehicles: Vec<VehicleStats>,
    /// Boarded passengers, ordered by guest name.
    pub passengers_boarded: Vec<PassengerRecord>,
    /// Outbound boarders absent from the return leg, ordered by guest name.
    /// Empty for outbound selections.
    pub passengers_missing: Vec<PassengerRecord>,
}

impl DashboardSnapshot {
    /// Returns the counts for `vehicle`, if it is eligible for the leg.
    #[must_use]
    pub fn vehicle(&self, vehicle: &str) -> Option<&Stats> {
        self.vehicles
            .iter()
            .find(|v| v.vehicle == vehicle)
            .map(|v| &v.stats)
    }
}
