use std::sync::{Mutex, MutexGuard};

use flightline_core::FlightSequence;
use flightline_store::{FlightStore, StoreError};

use crate::config::Config;

/// Shared service state.
///
/// The sequence is shared mutable state reachable from every concurrently
/// handled request, and it carries no locking of its own; one mutex guards
/// the whole structure (O(n) traversals dominate, a finer grain buys
/// nothing). The SQLite connection is `Send` but not `Sync`, so the store
/// sits behind its own mutex.
pub struct AppState {
    pub config: Config,
    sequence: Mutex<FlightSequence>,
    store: Mutex<FlightStore>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StoreError> {
        let store = FlightStore::open(&config.database_path)?;

        Ok(AppState {
            config,
            sequence: Mutex::new(FlightSequence::new()),
            store: Mutex::new(store),
        })
    }

    /// Lock the sequence, recovering the guard if a previous holder
    /// panicked mid-request.
    pub fn sequence(&self) -> MutexGuard<'_, FlightSequence> {
        self.sequence.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn store(&self) -> MutexGuard<'_, FlightStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}
