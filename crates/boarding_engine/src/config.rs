//! Engine configuration.

use std::path::PathBuf;

/// Default location of the seed document.
pub const DEFAULT_SEED_PATH: &str = "data/seed.json";

/// The environment variable used to override the seed path.
pub const SEED_PATH_ENV: &str = "BOARDING_SEED";

/// Format of the departure inside a boarded label (`15/08/2024 08:00`).
pub const DEFAULT_LABEL_DEPARTURE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format of the boarded-at timestamp (`15/08/2024 07:52:10`).
pub const DEFAULT_BOARDED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Configuration for a [`BoardingEngine`](crate::BoardingEngine) and the
/// process hosting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed document with trips and registered passengers.
    pub seed_path: PathBuf,
    /// `chrono` format for the departure in boarded labels.
    pub label_departure_format: String,
    /// `chrono` format for `boarded_at`.
    pub boarded_at_format: String,
}

impl EngineConfig {
    /// Create a config with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
            label_departure_format: DEFAULT_LABEL_DEPARTURE_FORMAT.to_string(),
            boarded_at_format: DEFAULT_BOARDED_AT_FORMAT.to_string(),
        }
    }

    /// Create a config with the seed path taken from `BOARDING_SEED`, falling
    /// back to [`DEFAULT_SEED_PATH`].
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(SEED_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::new().with_seed_path(path),
            _ => Self::new(),
        }
    }

    /// Override the seed path.
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = path.into();
        self
    }

    /// Override the boarded-at format.
    #[must_use]
    pub fn with_boarded_at_format(mut self, format: impl Into<String>) -> Self {
        self.boarded_at_format = format.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
