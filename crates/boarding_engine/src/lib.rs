//! # boarding_engine
//!
//! Attendance tracking for passengers boarding scheduled round trips.
//!
//! This crate provides:
//!
//! - [`catalog`] — the read-only [`TripCatalog`] and selection validation.
//! - [`store`] — the [`RecordStore`] seam and the in-memory [`MemoryStore`].
//! - [`checkin`] — the `Awaiting → Boarded` transition and on-demand record
//!   creation.
//! - [`aggregate`] — dashboard snapshots for a selection.
//! - [`seed`] — JSON seed documents for catalog and store.
//! - [`config`], [`clock`], [`error`] — ambient plumbing.

pub mod aggregate;
pub mod catalog;
pub mod checkin;
pub mod clock;
pub mod collate;
pub mod config;
pub mod engine;
pub mod error;
pub mod seed;
pub mod store;

pub use catalog::TripCatalog;
pub use checkin::RecordHandle;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use engine::BoardingEngine;
pub use error::{BoardingError, SeedError};
pub use seed::SeedDocument;
pub use store::{MemoryStore, RecordStore};

#[cfg(test)]
pub(crate) mod test_support {
    use boarding_model::time::parse_departure;
    use boarding_model::{BoardingStatus, Direction, LegGroup, PassengerRecord, Selection, Trip};
    use chrono::NaiveDateTime;

    use crate::{BoardingEngine, FixedClock, MemoryStore, RecordStore, TripCatalog};

    pub const ROUTE: &str = "BRASÍLIA → BASE";

    pub fn at(raw: &str) -> NaiveDateTime {
        parse_departure(raw).unwrap()
    }

    /// An `Awaiting` record whose leg group is anchored on `departure`.
    pub fn awaiting(
        wristband: &str,
        guest_name: &str,
        destination: &str,
        departure: &str,
        direction: Direction,
    ) -> PassengerRecord {
        PassengerRecord {
            wristband: wristband.to_string(),
            guest_name: guest_name.to_string(),
            tax_id: None,
            home_destination: destination.to_string(),
            travel_at: at(departure),
            direction,
            leg_group: LegGroup::new(destination, &at(departure)),
            status: BoardingStatus::Awaiting,
            vehicle: None,
            boarded_label: None,
            boarded_at: None,
        }
    }

    pub fn outbound(vehicle: &str) -> Selection {
        Selection::new(Direction::Outbound, ROUTE, at("2024-08-15 08:00"), vehicle)
    }

    pub fn ret(vehicle: &str) -> Selection {
        Selection::new(Direction::Return, ROUTE, at("2024-08-15 08:00"), vehicle)
    }

    /// Three trips and five passengers, four of them on the 08:00 outbound.
    pub fn engine() -> BoardingEngine {
        let catalog = TripCatalog::new(vec![
            Trip::new(ROUTE, at("2024-08-15 08:00"), ["Ônibus 1", "Ônibus 2"]).with_return(at("2024-08-15 18:00")),
            Trip::new(ROUTE, at("2024-08-15 18:00"), ["Ônibus 1", "Ônibus 2", "Van 1"]),
            Trip::new("SÃO PAULO → HOTEL", at("2024-08-20 14:00"), ["Micro-ônibus A"]),
        ]);
        let store = MemoryStore::new();
        for (wristband, name) in [
            ("QR001", "Ana Silva"),
            ("QR002", "Bruno Costa"),
            ("QR003", "Carla Dias"),
            ("QR004", "Daniel Martins"),
        ] {
            store.upsert(awaiting(wristband, name, ROUTE, "2024-08-15 08:00", Direction::Outbound));
        }
        store.upsert(awaiting(
            "QR005",
            "Eduarda Souza",
            "SÃO PAULO → HOTEL",
            "2024-08-20 14:00",
            Direction::Outbound,
        ));
        BoardingEngine::new(catalog, store).with_clock(FixedClock(
            NaiveDateTime::parse_from_str("2024-08-15 07:45:30", "%Y-%m-%d %H:%M:%S").unwrap(),
        ))
    }
}
