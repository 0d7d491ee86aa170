//! Durable flight record storage for Flightline.
//!
//! SQLite-backed store keyed by flight code, written to when a flight
//! enters the dispatch sequence and deleted from when a flight is
//! extracted. The store enforces no referential constraint against the
//! in-memory sequence; keeping the two consistent is the caller's policy.

pub mod store;

pub use store::{FlightStore, StoreError};
