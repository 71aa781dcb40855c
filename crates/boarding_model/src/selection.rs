//! Caller-supplied context: the selected trip leg and the operator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::passenger::{Direction, RecordKey};
use crate::trip::LegGroup;

/// The trip, leg and vehicle an operator is currently working.
///
/// `departure` is always the outbound departure of the round trip, also when
/// `direction` is [`Direction::Return`]; it anchors the [`LegGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub direction: Direction,
    pub destination: String,
    #[serde(with = "crate::time::departure")]
    pub departure: NaiveDateTime,
    pub vehicle: String,
}

impl Selection {
    #[must_use]
    pub fn new(
        direction: Direction,
        destination: impl Into<String>,
        departure: NaiveDateTime,
        vehicle: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            destination: destination.into(),
            departure,
            vehicle: vehicle.into(),
        }
    }

    #[must_use]
    pub fn leg_group(&self) -> LegGroup {
        LegGroup::new(&self.destination, &self.departure)
    }

    /// The record key for `wristband` on the selected leg.
    #[must_use]
    pub fn record_key(&self, wristband: &str) -> RecordKey {
        RecordKey::new(wristband, self.leg_group(), self.direction)
    }
}

/// An authenticated operator. Carried for display and audit only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    /// Leg groups this operator may work. Not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_trips: Option<Vec<String>>,
}

impl Operator {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            authorized_trips: None,
        }
    }

    /// Returns `true` if the operator's list names `leg_group`, or if the
    /// operator has no list.
    #[must_use]
    pub fn is_authorized_for(&self, leg_group: &LegGroup) -> bool {
        self.authorized_trips
            .as_ref()
            .is_none_or(|trips| trips.iter().any(|t| t == leg_group.as_str()))
    }
}
