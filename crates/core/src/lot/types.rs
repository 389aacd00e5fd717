use serde::Serialize;
use std::time::Duration;

use crate::ticket::Ticket;
use crate::vehicle::Vehicle;

/// Outcome of retrieving a vehicle and billing the stay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    /// The retrieved vehicle.
    pub vehicle: Vehicle,
    /// The ticket as originally issued, including the entry time.
    pub ticket: Ticket,
    /// Time between entry and departure.
    pub duration: Duration,
    /// Fee computed by the lot's strategy at departure.
    pub fee: f64,
    /// Name of the fee strategy that computed `fee`.
    pub fee_strategy: &'static str,
}

impl Receipt {
    pub fn lot_id(&self) -> &str {
        &self.ticket.lot_id
    }
}
