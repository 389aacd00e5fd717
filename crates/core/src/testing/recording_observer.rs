//! Observer that records every notification.

use parking_lot::Mutex;

use crate::observer::{LotObserver, LotStatus};

/// Records every [`LotStatus`] it receives, in order, for test assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    statuses: Mutex<Vec<LotStatus>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded statuses, oldest first.
    pub fn statuses(&self) -> Vec<LotStatus> {
        self.statuses.lock().clone()
    }

    pub fn last(&self) -> Option<LotStatus> {
        self.statuses.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.statuses.lock().len()
    }

    pub fn clear(&self) {
        self.statuses.lock().clear();
    }
}

impl LotObserver for RecordingObserver {
    fn on_lot_status_changed(&self, status: &LotStatus) {
        self.statuses.lock().push(status.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let observer = RecordingObserver::new();
        for available in [2, 1, 0] {
            observer.on_lot_status_changed(&LotStatus {
                is_full: available == 0,
                lot_id: "lot".to_string(),
                capacity: 2,
                available,
            });
        }

        let availability: Vec<usize> = observer.statuses().iter().map(|s| s.available).collect();
        assert_eq!(availability, vec![2, 1, 0]);
        assert!(observer.last().unwrap().is_full);

        observer.clear();
        assert_eq!(observer.count(), 0);
    }
}
