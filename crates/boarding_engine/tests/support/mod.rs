//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use boarding_engine::{BoardingEngine, FixedClock, SeedDocument};
use boarding_model::time::parse_departure;
use boarding_model::{Direction, Selection};
use chrono::NaiveDateTime;

pub const SEED: &str = include_str!("../../../../data/seed.json");

pub const ROUTE: &str = "BRASÍLIA → BASE";
pub const OUTBOUND_AT: &str = "2024-08-15 08:00";

pub fn at(raw: &str) -> NaiveDateTime {
    parse_departure(raw).expect("departure")
}

/// An engine over the demo seed with a frozen clock.
pub fn engine() -> BoardingEngine {
    let (catalog, store) = SeedDocument::from_json(SEED)
        .expect("seed document")
        .into_parts()
        .expect("seed parts");
    BoardingEngine::new(catalog, store).with_clock(FixedClock(
        NaiveDateTime::parse_from_str("2024-08-15 07:50:00", "%Y-%m-%d %H:%M:%S").expect("clock"),
    ))
}

pub fn selection(direction: Direction, vehicle: &str) -> Selection {
    Selection::new(direction, ROUTE, at(OUTBOUND_AT), vehicle)
}
