//! Flight record domain model
//!
//! Pure domain representation of a flight as handled by the dispatch
//! sequence. Records are immutable once constructed; the sequence never
//! inspects their contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational status of a flight.
///
/// The sequence container treats this as opaque; only the boundary layer
/// branches on it (emergencies go to the front of the sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    Scheduled,
    Emergency,
    Delayed,
}

impl FlightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Emergency => "Emergency",
            FlightStatus::Delayed => "Delayed",
        }
    }
}

impl std::str::FromStr for FlightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(FlightStatus::Scheduled),
            "Emergency" => Ok(FlightStatus::Emergency),
            "Delayed" => Ok(FlightStatus::Delayed),
            other => Err(format!("unknown flight status: {other}")),
        }
    }
}

/// A flight record.
///
/// `code` is caller-defined identity. Uniqueness is not enforced anywhere
/// in the core; deduplication is explicitly a non-goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Flight code, e.g. "AR1234"
    pub code: String,

    /// Operational status
    pub status: FlightStatus,

    /// Scheduled departure time
    pub scheduled_time: DateTime<Utc>,

    /// Origin airport
    pub origin: String,

    /// Destination airport
    pub destination: String,
}

impl FlightRecord {
    pub fn new(
        code: impl Into<String>,
        status: FlightStatus,
        scheduled_time: DateTime<Utc>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            status,
            scheduled_time,
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}
