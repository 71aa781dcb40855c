//! The boarding engine.
//!
//! [`BoardingEngine`] ties the [`TripCatalog`] and a [`RecordStore`]
//! together. Check-in lives in [`crate::checkin`], aggregation in
//! [`crate::aggregate`].

use boarding_model::Trip;

use crate::catalog::TripCatalog;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::store::{MemoryStore, RecordStore};

/// Check-in and dashboard operations over one catalog and one store.
///
/// The engine holds no per-operator state; any number of threads may call
/// it through a shared reference.
#[derive(Debug)]
pub struct BoardingEngine<S = MemoryStore> {
    pub(crate) catalog: TripCatalog,
    pub(crate) store: S,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) config: EngineConfig,
}

impl<S: RecordStore> BoardingEngine<S> {
    /// Create an engine using the system clock and default config.
    #[must_use]
    pub fn new(catalog: TripCatalog, store: S) -> Self {
        Self {
            catalog,
            store,
            clock: Box::new(SystemClock),
            config: EngineConfig::default(),
        }
    }

    /// Replace the clock used for `boarded_at`.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the engine config.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the trip catalog.
    #[must_use]
    pub fn catalog(&self) -> &TripCatalog {
        &self.catalog
    }

    /// Returns all catalog trips.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        self.catalog.trips()
    }

    /// Returns the record store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
