//! Check-in transition.
//!
//! Checking in is two steps:
//!
//! 1. [`BoardingEngine::resolve_or_create`] finds the record for the
//!    selected leg, creating an `Awaiting` one from another record of the
//!    same wristband when none exists yet.
//! 2. [`BoardingEngine::transition`] moves that record from `Awaiting` to
//!    `Boarded` under the record's lock.
//!
//! [`BoardingEngine::check_in`] runs both. `Boarded` is terminal: nothing in
//! this module ever sets a record back to `Awaiting`.

use boarding_model::{BoardingStatus, Direction, PassengerRecord, RecordKey, Selection};
use tracing::{info, warn};

use crate::engine::BoardingEngine;
use crate::error::BoardingError;
use crate::store::RecordStore;

/// A record resolved for check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHandle {
    /// Key of the resolved record.
    pub key: RecordKey,
    /// `true` if this resolution created the record.
    pub created: bool,
}

impl<S: RecordStore> BoardingEngine<S> {
    /// Find the record of `wristband` on the selected leg, creating it from
    /// another record of the same wristband if needed.
    ///
    /// # Errors
    ///
    /// - [`BoardingError::InvalidSelection`] if `selection` does not match
    ///   the catalog.
    /// - [`BoardingError::NotFound`] if the wristband has no record anywhere.
    ///   Nothing is created in that case.
    pub fn resolve_or_create(&self, wristband: &str, selection: &Selection) -> Result<RecordHandle, BoardingError> {
        let leg = self.catalog.validate(selection)?;
        let wristband = wristband.trim();
        let key = selection.record_key(wristband);

        if self.store.find(&key).is_some() {
            return Ok(RecordHandle { key, created: false });
        }

        let seed = self
            .store
            .find_any_for_wristband(wristband)
            .ok_or_else(|| BoardingError::NotFound {
                wristband: wristband.to_string(),
            })?;

        let (_, created) = self
            .store
            .insert_if_absent(PassengerRecord::seeded_from(&seed, key.clone(), leg.departure));
        if created {
            info!(
                wristband,
                leg_group = %key.leg_group,
                direction = %key.direction,
                seed_leg_group = %seed.leg_group,
                "created passenger record on demand"
            );
        }
        Ok(RecordHandle { key, created })
    }

    /// Board the record behind `handle` on the selected vehicle.
    ///
    /// # Errors
    ///
    /// - [`BoardingError::AlreadyBoarded`] if the record is already
    ///   `Boarded`; the stored record is left untouched.
    /// - [`BoardingError::NotFound`] if `handle` names no record.
    pub fn transition(&self, handle: &RecordHandle, selection: &Selection) -> Result<PassengerRecord, BoardingError> {
        // Read before taking the record's lock; the outbound record may live
        // in the same shard.
        let went_outbound = match handle.key.direction {
            Direction::Outbound => true,
            Direction::Return => self
                .store
                .find(&handle.key.with_direction(Direction::Outbound))
                .is_some_and(|r| r.is_boarded()),
        };

        let label = self.boarded_label(selection);
        let boarded_at = self.clock.now().format(&self.config.boarded_at_format).to_string();

        let record = self.store.update(&handle.key, &mut |record| {
            if record.is_boarded() {
                return Err(BoardingError::AlreadyBoarded {
                    guest_name: record.guest_name.clone(),
                    boarded_label: record.boarded_label.clone().unwrap_or_default(),
                });
            }
            record.status = BoardingStatus::Boarded;
            record.vehicle = Some(selection.vehicle.clone());
            record.boarded_label = Some(label.clone());
            record.boarded_at = Some(boarded_at.clone());
            Ok(())
        })?;

        if !went_outbound {
            warn!(
                wristband = %record.wristband,
                guest = %record.guest_name,
                leg_group = %record.leg_group,
                "boarded return leg without a recorded outbound boarding"
            );
        }
        info!(
            wristband = %record.wristband,
            guest = %record.guest_name,
            leg_group = %record.leg_group,
            direction = %record.direction,
            vehicle = %selection.vehicle,
            "passenger boarded"
        );
        Ok(record)
    }

    /// Check `wristband` in on the selected leg and vehicle.
    ///
    /// # Errors
    ///
    /// See [`resolve_or_create`](Self::resolve_or_create) and
    /// [`transition`](Self::transition).
    pub fn check_in(&self, wristband: &str, selection: &Selection) -> Result<PassengerRecord, BoardingError> {
        let handle = self.resolve_or_create(wristband, selection)?;
        self.transition(&handle, selection)
    }

    /// `"<DIRECTION> | <destination> (<departure>) [<vehicle>]"`.
    #[must_use]
    pub fn boarded_label(&self, selection: &Selection) -> String {
        format!(
            "{} | {} ({}) [{}]",
            selection.direction,
            selection.destination,
            selection.departure.format(&self.config.label_departure_format),
            selection.vehicle
        )
    }
}
