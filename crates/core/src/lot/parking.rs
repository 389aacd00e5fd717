use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::error::{LotError, TicketRejection};
use super::types::Receipt;
use crate::fee::{FeeStrategy, HourlyFeeStrategy, DEFAULT_HOURLY_RATE};
use crate::id::generate_short_id;
use crate::observer::{LotObserver, LotStatus};
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;

/// A capacity-bounded parking area tracking occupants by ticket number.
pub struct ParkingLot {
    id: String,
    capacity: usize,
    /// Active tickets, keyed by ticket number.
    occupied: HashMap<String, (Ticket, Vehicle)>,
    /// Ticket numbers already used to retrieve a vehicle. Never cleared.
    spent: HashSet<String>,
    observers: Vec<Arc<dyn LotObserver>>,
    fee_strategy: Arc<dyn FeeStrategy>,
}

impl ParkingLot {
    /// Create a lot with a generated id and the default hourly fee.
    pub fn new(capacity: usize) -> Self {
        Self::with_id(generate_short_id(), capacity)
    }

    pub fn with_id(id: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            capacity,
            occupied: HashMap::new(),
            spent: HashSet::new(),
            observers: Vec::new(),
            fee_strategy: Arc::new(HourlyFeeStrategy::new(DEFAULT_HOURLY_RATE)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupied(&self) -> usize {
        self.occupied.len()
    }

    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.occupied.len())
    }

    pub fn is_full(&self) -> bool {
        self.occupied.len() >= self.capacity
    }

    pub fn status(&self) -> LotStatus {
        LotStatus {
            is_full: self.is_full(),
            lot_id: self.id.clone(),
            capacity: self.capacity,
            available: self.available(),
        }
    }

    /// Whether a vehicle with this plate occupies a space here.
    pub fn contains_vehicle(&self, plate: &str) -> bool {
        self.occupied
            .values()
            .any(|(_, vehicle)| vehicle.license_plate() == plate)
    }

    /// The vehicle held under `ticket`, if it is an active ticket of this lot.
    pub fn parked_vehicle(&self, ticket: &Ticket) -> Option<&Vehicle> {
        self.occupied
            .get(&ticket.number)
            .map(|(_, vehicle)| vehicle)
    }

    pub fn is_ticket_spent(&self, ticket_number: &str) -> bool {
        self.spent.contains(ticket_number)
    }

    /// Whether this lot issued `ticket_number`, active or spent.
    pub fn has_issued(&self, ticket_number: &str) -> bool {
        self.occupied.contains_key(ticket_number) || self.spent.contains(ticket_number)
    }

    /// Subscribe an observer. Duplicates are kept and notified twice.
    pub fn add_observer(&mut self, observer: Arc<dyn LotObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn change_fee_strategy(&mut self, strategy: Arc<dyn FeeStrategy>) {
        debug!(lot_id = %self.id, strategy = strategy.name(), "Changed fee strategy");
        self.fee_strategy = strategy;
    }

    pub fn fee_strategy_name(&self) -> &'static str {
        self.fee_strategy.name()
    }

    pub fn calculate_fee(&self, duration: std::time::Duration) -> f64 {
        self.fee_strategy.calculate_fee(duration)
    }

    /// Park a vehicle, entering now.
    pub fn park(&mut self, vehicle: &Vehicle) -> Result<Ticket, LotError> {
        self.park_at(vehicle, Utc::now())
    }

    /// Park a vehicle with an explicit entry time.
    pub fn park_at(
        &mut self,
        vehicle: &Vehicle,
        entered_at: DateTime<Utc>,
    ) -> Result<Ticket, LotError> {
        let number = self.next_ticket_number();
        self.park_with_number(vehicle, number, entered_at)
    }

    /// Park under a ticket number picked by the caller, which must not have
    /// been issued by this lot before.
    pub(crate) fn park_with_number(
        &mut self,
        vehicle: &Vehicle,
        number: String,
        entered_at: DateTime<Utc>,
    ) -> Result<Ticket, LotError> {
        debug_assert!(!self.has_issued(&number), "ticket number reused");

        if vehicle.has_blank_plate() {
            return Err(LotError::EmptyLicensePlate);
        }

        if self.is_full() {
            return Err(LotError::LotFull {
                lot_id: self.id.clone(),
                capacity: self.capacity,
            });
        }

        if self.contains_vehicle(vehicle.license_plate()) {
            return Err(LotError::DuplicateVehicle {
                plate: vehicle.license_plate().to_string(),
                lot_id: self.id.clone(),
            });
        }

        let ticket = Ticket::new(number, self.id.clone()).with_issued_at(entered_at);
        self.occupied
            .insert(ticket.number.clone(), (ticket.clone(), vehicle.clone()));

        debug!(
            lot_id = %self.id,
            ticket = %ticket.number,
            plate = %vehicle,
            "Parked vehicle"
        );
        self.notify_observers();

        Ok(ticket)
    }

    /// Retrieve the vehicle held under `ticket`. The ticket is spent afterwards.
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Vehicle, LotError> {
        self.release(ticket).map(|(_, vehicle)| vehicle)
    }

    /// Retrieve the vehicle and bill the stay up to `departed_at`.
    pub fn checkout(
        &mut self,
        ticket: &Ticket,
        departed_at: DateTime<Utc>,
    ) -> Result<Receipt, LotError> {
        let (issued, vehicle) = self.release(ticket)?;
        let duration = issued.elapsed(departed_at).to_std().unwrap_or_default();

        Ok(Receipt {
            vehicle,
            ticket: issued,
            duration,
            fee: self.calculate_fee(duration),
            fee_strategy: self.fee_strategy.name(),
        })
    }

    fn release(&mut self, ticket: &Ticket) -> Result<(Ticket, Vehicle), LotError> {
        if ticket.number.is_empty() {
            return Err(LotError::EmptyTicket);
        }

        if self.spent.contains(&ticket.number) {
            return Err(LotError::UnrecognizedTicket {
                ticket: ticket.number.clone(),
                reason: TicketRejection::AlreadyUsed,
            });
        }

        let (issued, vehicle) =
            self.occupied
                .remove(&ticket.number)
                .ok_or_else(|| LotError::UnrecognizedTicket {
                    ticket: ticket.number.clone(),
                    reason: TicketRejection::NeverIssued,
                })?;
        self.spent.insert(ticket.number.clone());

        debug!(
            lot_id = %self.id,
            ticket = %ticket.number,
            plate = %vehicle,
            "Unparked vehicle"
        );
        self.notify_observers();

        Ok((issued, vehicle))
    }

    /// Ticket numbers are unique among active and spent tickets of this lot.
    fn next_ticket_number(&self) -> String {
        loop {
            let number = generate_short_id();
            if !self.has_issued(&number) {
                return number;
            }
        }
    }

    fn notify_observers(&self) {
        let status = self.status();
        for observer in &self.observers {
            observer.on_lot_status_changed(&status);
        }
    }
}

impl fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLot")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("occupied", &self.occupied.len())
            .field("spent", &self.spent.len())
            .field("observers", &self.observers.len())
            .field("fee_strategy", &self.fee_strategy)
            .finish()
    }
}
