use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::availability::AvailabilityTracker;
use super::error::AttendantError;
use crate::fee::FeeStrategy;
use crate::id::generate_short_id;
use crate::lot::{ParkingLot, Receipt};
use crate::metrics::{self, result_label};
use crate::observer::LotObserver;
use crate::selection::{FirstAvailableStrategy, LotSelectionStrategy};
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;

/// Coordinates a set of lots and is the single entry point for park and
/// unpark requests.
///
/// The attendant keeps a cache of lots with free space. The cache only stays
/// current for lots the attendant is subscribed to, see
/// [`status_listener`](Self::status_listener) and
/// [`subscribe_to_all_lots`](Self::subscribe_to_all_lots). Assigning a lot
/// does not subscribe to it.
///
/// Ticket numbers are unique across all managed lots, so a ticket presented
/// by number alone identifies one parking event.
pub struct ParkingAttendant {
    name: String,
    lots: Vec<ParkingLot>,
    available: Arc<AvailabilityTracker>,
    /// `None` means first available lot in declaration order.
    strategy: Option<Arc<dyn LotSelectionStrategy>>,
}

impl ParkingAttendant {
    /// Lot ids must be unique; use [`assign_parking_lot`](Self::assign_parking_lot)
    /// to add lots with a checked id.
    pub fn new(name: impl Into<String>, lots: Vec<ParkingLot>) -> Self {
        debug_assert!(
            lots.iter()
                .enumerate()
                .all(|(i, lot)| lots[..i].iter().all(|other| other.id() != lot.id())),
            "duplicate lot id"
        );

        let available = Arc::new(AvailabilityTracker::new());
        for lot in &lots {
            available.record(lot.id(), !lot.is_full());
        }

        Self {
            name: name.into(),
            lots,
            available,
            strategy: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parking_lots(&self) -> &[ParkingLot] {
        &self.lots
    }

    pub fn parking_lots_mut(&mut self) -> &mut [ParkingLot] {
        &mut self.lots
    }

    /// Append a lot. Lots are never removed.
    pub fn assign_parking_lot(&mut self, lot: ParkingLot) -> Result<(), AttendantError> {
        if self.lots.iter().any(|existing| existing.id() == lot.id()) {
            return Err(AttendantError::DuplicateLot {
                lot_id: lot.id().to_string(),
            });
        }

        self.available.record(lot.id(), !lot.is_full());
        self.lots.push(lot);
        Ok(())
    }

    /// Observer handle to subscribe to a lot so the availability cache follows it.
    pub fn status_listener(&self) -> Arc<dyn LotObserver> {
        self.available.clone()
    }

    /// Subscribe the attendant to every lot it currently manages.
    pub fn subscribe_to_all_lots(&mut self) {
        for lot in &mut self.lots {
            lot.add_observer(self.available.clone());
        }
    }

    /// Ids of lots with at least one free space, sorted.
    pub fn available_lots(&self) -> Vec<String> {
        self.available.snapshot()
    }

    pub fn available_lot_count(&self) -> usize {
        self.available.len()
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy
            .as_ref()
            .map_or(FirstAvailableStrategy.name(), |s| s.name())
    }

    /// Swap the lot-selection strategy. Issued tickets are unaffected.
    pub fn change_parking_strategy(&mut self, strategy: Arc<dyn LotSelectionStrategy>) {
        debug!(attendant = %self.name, strategy = strategy.name(), "Changed parking strategy");
        self.strategy = Some(strategy);
    }

    /// Apply one fee strategy to every managed lot.
    pub fn change_fee_strategy(&mut self, strategy: Arc<dyn FeeStrategy>) {
        for lot in &mut self.lots {
            lot.change_fee_strategy(Arc::clone(&strategy));
        }
    }

    /// Whether the vehicle occupies a space in any managed lot.
    pub fn is_car_parked_anywhere(&self, vehicle: &Vehicle) -> bool {
        self.lots
            .iter()
            .any(|lot| lot.contains_vehicle(vehicle.license_plate()))
    }

    /// Whether any managed lot issued `ticket_number`, active or spent.
    pub fn is_ticket_number_issued(&self, ticket_number: &str) -> bool {
        self.lots.iter().any(|lot| lot.has_issued(ticket_number))
    }

    pub fn park_car(&mut self, vehicle: &Vehicle) -> Result<Ticket, AttendantError> {
        self.park_car_at(vehicle, Utc::now())
    }

    /// Park with an explicit entry time.
    pub fn park_car_at(
        &mut self,
        vehicle: &Vehicle,
        entered_at: DateTime<Utc>,
    ) -> Result<Ticket, AttendantError> {
        let result = self.try_park(vehicle, entered_at);
        metrics::PARK_OPERATIONS
            .with_label_values(&[result_label(&result)])
            .inc();
        result
    }

    fn try_park(
        &mut self,
        vehicle: &Vehicle,
        entered_at: DateTime<Utc>,
    ) -> Result<Ticket, AttendantError> {
        if self.is_car_parked_anywhere(vehicle) {
            return Err(AttendantError::CarAlreadyParked {
                plate: vehicle.license_plate().to_string(),
            });
        }

        let index = match &self.strategy {
            Some(strategy) => strategy.choose(&self.lots),
            None => FirstAvailableStrategy.choose(&self.lots),
        }
        .ok_or(AttendantError::AllLotsFull)?;

        let number = self.next_ticket_number();
        let lot = self
            .lots
            .get_mut(index)
            .ok_or(AttendantError::AllLotsFull)?;
        Ok(lot.park_with_number(vehicle, number, entered_at)?)
    }

    fn next_ticket_number(&self) -> String {
        loop {
            let number = generate_short_id();
            if !self.is_ticket_number_issued(&number) {
                return number;
            }
        }
    }

    pub fn unpark_car(&mut self, ticket: &Ticket) -> Result<Vehicle, AttendantError> {
        let result = self
            .owning_lot(ticket)
            .and_then(|lot| lot.unpark(ticket).map_err(AttendantError::from));
        metrics::UNPARK_OPERATIONS
            .with_label_values(&[result_label(&result)])
            .inc();
        result
    }

    /// Unpark and bill the stay up to `departed_at` with the owning lot's fee strategy.
    pub fn settle(
        &mut self,
        ticket: &Ticket,
        departed_at: DateTime<Utc>,
    ) -> Result<Receipt, AttendantError> {
        let result = self
            .owning_lot(ticket)
            .and_then(|lot| lot.checkout(ticket, departed_at).map_err(AttendantError::from));
        metrics::UNPARK_OPERATIONS
            .with_label_values(&[result_label(&result)])
            .inc();
        if let Ok(receipt) = &result {
            metrics::FEES_COLLECTED.inc_by(receipt.fee.max(0.0));
        }
        result
    }

    /// The lot named by the ticket, or the lot holding its number when the
    /// ticket carries no lot id.
    fn owning_lot(&mut self, ticket: &Ticket) -> Result<&mut ParkingLot, AttendantError> {
        let lot = if ticket.lot_id.is_empty() {
            self.lots
                .iter_mut()
                .find(|lot| lot.parked_vehicle(ticket).is_some())
        } else {
            self.lots
                .iter_mut()
                .find(|lot| lot.id() == ticket.lot_id)
                .filter(|lot| lot.parked_vehicle(ticket).is_some())
        };

        lot.ok_or_else(|| AttendantError::TicketNotFound {
            ticket: ticket.number.clone(),
        })
    }
}

impl fmt::Debug for ParkingAttendant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingAttendant")
            .field("name", &self.name)
            .field("lots", &self.lots)
            .field("available", &self.available)
            .field("strategy", &self.strategy_name())
            .finish()
    }
}
