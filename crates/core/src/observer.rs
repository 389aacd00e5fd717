//! Lot status notifications.
//!
//! Lots push a [`LotStatus`] snapshot to every subscribed [`LotObserver`]
//! synchronously, in subscription order, after each successful park or
//! unpark. Failed operations never notify.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Snapshot of a lot's occupancy at the moment it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStatus {
    /// Whether the lot has no free space left.
    pub is_full: bool,
    /// Id of the lot that changed.
    pub lot_id: String,
    /// Total number of spaces.
    pub capacity: usize,
    /// Free spaces (capacity − occupied).
    pub available: usize,
}

/// Subscriber to lot status changes.
///
/// Observers are shared between a lot and whoever else holds them, so the
/// callback takes `&self`; implementors keep their own state behind a lock.
pub trait LotObserver: Send + Sync {
    fn on_lot_status_changed(&self, status: &LotStatus);
}

/// Observer that logs every status change through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl LotObserver for TracingObserver {
    fn on_lot_status_changed(&self, status: &LotStatus) {
        if status.is_full {
            warn!(
                lot_id = %status.lot_id,
                capacity = status.capacity,
                "Parking lot is now full"
            );
        } else {
            info!(
                lot_id = %status.lot_id,
                capacity = status.capacity,
                available = status.available,
                "Parking lot has available spaces"
            );
        }
    }
}
