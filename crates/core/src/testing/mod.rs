//! Testing utilities for code built on the parking core.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use parking_core::testing::{fixtures, RecordingObserver};
//!
//! let mut lot = fixtures::lot_with_id("lot-1", 1);
//! let observer = Arc::new(RecordingObserver::new());
//! lot.add_observer(observer.clone());
//!
//! lot.park(&fixtures::vehicle("AAA111")).unwrap();
//! assert_eq!(observer.count(), 1);
//! assert!(observer.last().unwrap().is_full);
//! ```

mod recording_observer;

pub use recording_observer::RecordingObserver;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::attendant::ParkingAttendant;
    use crate::lot::ParkingLot;
    use crate::vehicle::Vehicle;

    pub fn vehicle(plate: &str) -> Vehicle {
        Vehicle::new(plate)
    }

    pub fn lot_with_id(id: &str, capacity: usize) -> ParkingLot {
        ParkingLot::with_id(id, capacity)
    }

    /// Attendant named "test-attendant" over lots `lot-1`, `lot-2`, ... with
    /// the given capacities, subscribed to all of them, first-fit selection.
    pub fn attendant_with_capacities(capacities: &[usize]) -> ParkingAttendant {
        let lots = capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| ParkingLot::with_id(format!("lot-{}", i + 1), capacity))
            .collect();
        let mut attendant = ParkingAttendant::new("test-attendant", lots);
        attendant.subscribe_to_all_lots();
        attendant
    }
}
