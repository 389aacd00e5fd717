use parking_lot::Mutex;
use std::collections::BTreeSet;

use crate::observer::{LotObserver, LotStatus};

/// Set of lot ids that have at least one free space.
///
/// Kept current by subscribing it to lots; it is the attendant's status
/// listener.
#[derive(Debug, Default)]
pub struct AvailabilityTracker {
    lots: Mutex<BTreeSet<String>>,
}

impl AvailabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of a lot directly, without a notification.
    pub fn record(&self, lot_id: &str, has_space: bool) {
        let mut lots = self.lots.lock();
        if has_space {
            lots.insert(lot_id.to_string());
        } else {
            lots.remove(lot_id);
        }
    }

    pub fn contains(&self, lot_id: &str) -> bool {
        self.lots.lock().contains(lot_id)
    }

    pub fn len(&self) -> usize {
        self.lots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.lock().is_empty()
    }

    /// Lot ids in sorted order.
    pub fn snapshot(&self) -> Vec<String> {
        self.lots.lock().iter().cloned().collect()
    }
}

impl LotObserver for AvailabilityTracker {
    fn on_lot_status_changed(&self, status: &LotStatus) {
        self.record(&status.lot_id, !status.is_full);
    }
}
