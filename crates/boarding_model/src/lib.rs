//! # boarding_model
//!
//! Plain data types shared by the boarding engine and its callers.
//!
//! This crate provides:
//!
//! - [`Trip`] and [`LegGroup`] — scheduled trips and the key pairing a
//!   trip's outbound and return legs.
//! - [`PassengerRecord`] and [`RecordKey`] — one check-in row per
//!   wristband, leg group and direction.
//! - [`Selection`] and [`Operator`] — the caller-supplied context.
//! - [`DashboardSnapshot`] — aggregate counts derived from the records.
//! - [`time`] — the `yyyy-MM-dd HH:mm` wire format for timestamps.

pub mod passenger;
pub mod selection;
pub mod snapshot;
pub mod time;
pub mod trip;

pub use passenger::{BoardingStatus, Direction, PassengerRecord, RecordKey};
pub use selection::{Operator, Selection};
pub use snapshot::{DashboardSnapshot, Stats, VehicleStats};
pub use trip::{LegGroup, Trip};
