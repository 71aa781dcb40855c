//! Engine error types.

use std::path::PathBuf;

use boarding_model::RecordKey;

/// Errors returned by check-in and snapshot operations.
///
/// All variants are recoverable and returned to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardingError {
    /// The wristband has no record under any leg group or direction.
    #[error("wristband not registered: {wristband}")]
    NotFound { wristband: String },

    /// The record for this leg is already boarded.
    #[error("passenger {guest_name} already boarded on {boarded_label}")]
    AlreadyBoarded {
        guest_name: String,
        boarded_label: String,
    },

    /// The selection is incomplete or does not match the trip catalog.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

/// Errors raised while loading a seed document.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON for the expected shape.
    #[error("failed to decode seed document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Two passenger records share a composite key.
    #[error("duplicate passenger record: {0}")]
    DuplicateRecord(RecordKey),

    /// A trip entry is unusable.
    #[error("invalid trip: {0}")]
    InvalidTrip(String),
}
