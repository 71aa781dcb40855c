//! Dashboard aggregation.
//!
//! A snapshot is derived from one pass over the selection's leg group:
//!
//! - outbound legs count everyone registered for the leg;
//! - return legs expect exactly the passengers who boarded outbound, and
//!   report the ones not yet back as missing.

use std::collections::HashSet;

use boarding_model::{DashboardSnapshot, Direction, PassengerRecord, Selection, Stats, VehicleStats};
use tracing::debug;

use crate::collate::compare_names;
use crate::engine::BoardingEngine;
use crate::error::BoardingError;
use crate::store::RecordStore;

fn sort_by_guest_name(records: &mut [PassengerRecord]) {
    records.sort_by(|a, b| {
        compare_names(&a.guest_name, &b.guest_name).then_with(|| a.wristband.cmp(&b.wristband))
    });
}

impl<S: RecordStore> BoardingEngine<S> {
    /// Compute the dashboard for `selection`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardingError::InvalidSelection`] if `selection` does not
    /// match the catalog.
    pub fn compute_snapshot(&self, selection: &Selection) -> Result<DashboardSnapshot, BoardingError> {
        let leg = self.catalog.validate(selection)?;
        let leg_group = selection.leg_group();

        let mut outbound_boarded = Vec::new();
        let mut population = Vec::new();
        for record in self.store.scan_leg_group(&leg_group) {
            if record.direction == Direction::Outbound && record.is_boarded() {
                outbound_boarded.push(record.clone());
            }
            if record.direction == selection.direction {
                population.push(record);
            }
        }

        let population_size = population.len();
        let mut boarded: Vec<PassengerRecord> = population.into_iter().filter(PassengerRecord::is_boarded).collect();

        let (total, missing, mut passengers_missing) = match selection.direction {
            Direction::Outbound => (population_size, None, Vec::new()),
            Direction::Return => {
                let returned: HashSet<&str> = boarded.iter().map(|r| r.wristband.as_str()).collect();
                let absent: Vec<PassengerRecord> = outbound_boarded
                    .iter()
                    .filter(|r| !returned.contains(r.wristband.as_str()))
                    .cloned()
                    .collect();
                (outbound_boarded.len(), Some(absent.len()), absent)
            }
        };

        let vehicles = leg
            .vehicles
            .iter()
            .map(|vehicle| VehicleStats {
                vehicle: vehicle.clone(),
                stats: Stats {
                    boarded: boarded
                        .iter()
                        .filter(|r| r.vehicle.as_deref() == Some(vehicle.as_str()))
                        .count(),
                    total: 0,
                    missing: None,
                },
            })
            .collect();

        sort_by_guest_name(&mut boarded);
        sort_by_guest_name(&mut passengers_missing);

        let overall = Stats {
            boarded: boarded.len(),
            total,
            missing,
        };
        debug!(
            leg_group = %leg_group,
            direction = %selection.direction,
            boarded = overall.boarded,
            total = overall.total,
            missing = ?overall.missing,
            "computed dashboard snapshot"
        );

        Ok(DashboardSnapshot {
            selection: selection.clone(),
            overall,
            vehicles,
            passengers_boarded: boarded,
            passengers_missing,
        })
    }
}
