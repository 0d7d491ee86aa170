//! Test utilities for cross-crate integration tests

use chrono::{TimeZone, Utc};
use flightline_core::{FlightRecord, FlightSequence, FlightStatus};

/// Build a flight record with fixed route and time.
pub fn flight(code: &str, status: FlightStatus) -> FlightRecord {
    FlightRecord::new(
        code,
        status,
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        "EZE",
        "SCL",
    )
}

/// The dispatch placement policy: emergencies jump to the front of the
/// sequence, everything else boards at the back. This lives outside the
/// container on purpose; the container never inspects record contents.
pub fn place(sequence: &mut FlightSequence, record: FlightRecord) {
    if record.status == FlightStatus::Emergency {
        sequence.push_front(record);
    } else {
        sequence.push_back(record);
    }
}

/// Head-to-tail flight codes for assertions.
pub fn codes(sequence: &FlightSequence) -> Vec<String> {
    sequence.to_vec().into_iter().map(|f| f.code).collect()
}
