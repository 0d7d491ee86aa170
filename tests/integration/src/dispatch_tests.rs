//! Dispatch placement and reordering scenarios over the sequence container

use crate::test_utils::*;
use flightline_core::{FlightSequence, FlightStatus};

#[test]
fn test_emergencies_jump_the_queue() {
    let mut sequence = FlightSequence::new();

    place(&mut sequence, flight("AR100", FlightStatus::Scheduled));
    place(&mut sequence, flight("IB200", FlightStatus::Delayed));
    place(&mut sequence, flight("LA300", FlightStatus::Emergency));
    place(&mut sequence, flight("AF400", FlightStatus::Scheduled));
    place(&mut sequence, flight("BA500", FlightStatus::Emergency));

    // Each emergency lands at the then-current front
    assert_eq!(codes(&sequence), ["BA500", "LA300", "AR100", "IB200", "AF400"]);
    assert_eq!(sequence.len(), 5);
}

#[test]
fn test_next_flight_is_most_recent_emergency() {
    let mut sequence = FlightSequence::new();

    place(&mut sequence, flight("AR100", FlightStatus::Scheduled));
    assert_eq!(sequence.first().unwrap().code, "AR100");

    place(&mut sequence, flight("LA300", FlightStatus::Emergency));
    assert_eq!(sequence.first().unwrap().code, "LA300");
    assert_eq!(sequence.last().unwrap().code, "AR100");
}

#[test]
fn test_reorder_interprets_destination_after_removal() {
    let mut sequence = FlightSequence::new();
    for code in ["C", "D", "A", "B"] {
        place(&mut sequence, flight(code, FlightStatus::Scheduled));
    }

    // Extract C at 0 (list becomes [D, A, B]), then insert at 2
    assert!(sequence.reorder(0, 2));
    assert_eq!(codes(&sequence), ["D", "A", "C", "B"]);
}

#[test]
fn test_failed_reorder_leaves_sequence_intact() {
    let mut sequence = FlightSequence::new();
    for code in ["A", "B", "C"] {
        place(&mut sequence, flight(code, FlightStatus::Scheduled));
    }

    assert!(!sequence.reorder(10, 0));
    assert_eq!(codes(&sequence), ["A", "B", "C"]);
    assert_eq!(sequence.len(), 3);
}
