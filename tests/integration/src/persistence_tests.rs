//! Store/sequence consistency scenarios
//!
//! The store write and the sequence mutation are separate, non-atomic
//! steps; these tests exercise the persist-then-mutate policy the API
//! layer follows.

use crate::test_utils::*;
use flightline_core::{FlightSequence, FlightStatus};
use flightline_store::FlightStore;

#[test]
fn test_persist_then_place() {
    let mut store = FlightStore::open_in_memory().unwrap();
    let mut sequence = FlightSequence::new();

    for (code, status) in [
        ("AR100", FlightStatus::Scheduled),
        ("LA300", FlightStatus::Emergency),
        ("IB200", FlightStatus::Delayed),
    ] {
        let record = flight(code, status);
        store.insert(&record).unwrap();
        place(&mut sequence, record);
    }

    assert_eq!(store.count().unwrap(), 3);
    assert_eq!(sequence.len(), 3);
    // Store keeps insertion order; the sequence applies placement
    assert_eq!(
        store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|f| f.code)
            .collect::<Vec<_>>(),
        ["AR100", "LA300", "IB200"]
    );
    assert_eq!(codes(&sequence), ["LA300", "AR100", "IB200"]);
}

#[test]
fn test_extract_then_delete() {
    let mut store = FlightStore::open_in_memory().unwrap();
    let mut sequence = FlightSequence::new();

    for code in ["AR100", "IB200", "AF400"] {
        let record = flight(code, FlightStatus::Scheduled);
        store.insert(&record).unwrap();
        place(&mut sequence, record);
    }

    let extracted = sequence.extract_at(1).unwrap();
    assert_eq!(extracted.code, "IB200");
    assert!(store.delete(&extracted.code).unwrap());

    assert_eq!(sequence.len(), 2);
    assert_eq!(store.count().unwrap(), 2);
    assert!(store.get("IB200").unwrap().is_none());
}

#[test]
fn test_failed_extraction_touches_nothing() {
    let mut store = FlightStore::open_in_memory().unwrap();
    let mut sequence = FlightSequence::new();

    let record = flight("AR100", FlightStatus::Scheduled);
    store.insert(&record).unwrap();
    place(&mut sequence, record);

    assert!(sequence.extract_at(7).is_none());
    assert_eq!(sequence.len(), 1);
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_on_disk_store_survives_reopen() {
    let db_path = std::env::temp_dir().join(format!("test_flightline_{}.db", uuid::Uuid::new_v4()));

    {
        let mut store = FlightStore::open(&db_path).unwrap();
        store
            .insert(&flight("AR100", FlightStatus::Scheduled))
            .unwrap();
    }

    let store = FlightStore::open(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.get("AR100").unwrap().unwrap().code, "AR100");

    // Cleanup
    drop(store);
    std::fs::remove_file(db_path).ok();
}
