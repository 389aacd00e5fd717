use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

use super::{AttendantError, ParkingAttendant};
use crate::fee::FeeStrategy;
use crate::lot::Receipt;
use crate::selection::LotSelectionStrategy;
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;

/// Cloneable, thread-safe handle to one attendant.
///
/// Every call takes a single lock around the whole attendant, so requests
/// from different threads are serialized and the no-double-parking and
/// capacity rules hold across threads.
#[derive(Debug, Clone)]
pub struct SharedAttendant {
    inner: Arc<Mutex<ParkingAttendant>>,
}

impl SharedAttendant {
    pub fn new(attendant: ParkingAttendant) -> Self {
        Self {
            inner: Arc::new(Mutex::new(attendant)),
        }
    }

    pub fn park_car(&self, vehicle: &Vehicle) -> Result<Ticket, AttendantError> {
        self.inner.lock().park_car(vehicle)
    }

    pub fn unpark_car(&self, ticket: &Ticket) -> Result<Vehicle, AttendantError> {
        self.inner.lock().unpark_car(ticket)
    }

    pub fn settle(
        &self,
        ticket: &Ticket,
        departed_at: DateTime<Utc>,
    ) -> Result<Receipt, AttendantError> {
        self.inner.lock().settle(ticket, departed_at)
    }

    pub fn change_parking_strategy(&self, strategy: Arc<dyn LotSelectionStrategy>) {
        self.inner.lock().change_parking_strategy(strategy);
    }

    pub fn change_fee_strategy(&self, strategy: Arc<dyn FeeStrategy>) {
        self.inner.lock().change_fee_strategy(strategy);
    }

    /// Run `f` with exclusive access to the attendant.
    pub fn with<R>(&self, f: impl FnOnce(&mut ParkingAttendant) -> R) -> R {
        let mut attendant = self.inner.lock();
        f(&mut *attendant)
    }
}
