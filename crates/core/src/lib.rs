//! Core functionality for the Flightline dispatch system.
//!
//! This crate contains pure domain logic with no I/O dependencies:
//! - Flight record definitions
//! - The ordered flight sequence and its positional operations
//! - Logging initialization shared by the services

pub mod flight;
pub mod logging;
pub mod sequence;

pub use flight::{FlightRecord, FlightStatus};
pub use sequence::FlightSequence;
