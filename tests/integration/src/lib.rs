//! Integration tests across the flightline crates
//!
//! This test suite validates:
//! - The dispatch placement policy (emergencies to the front) over the
//!   sequence container
//! - Persist-then-mutate consistency between the store and the sequence
//! - Reorder index-shift semantics end to end

pub mod test_utils;

#[cfg(test)]
mod dispatch_tests;

#[cfg(test)]
mod persistence_tests;
