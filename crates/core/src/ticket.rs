//! Parking tickets.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A one-time-use credential for retrieving a parked vehicle.
///
/// A lot matches tickets by `number`. An attendant routes a ticket to the
/// lot named by `lot_id` when it is set, and searches all lots otherwise.
/// The entry time is carried so that callers can report duration and fees
/// without keeping their own bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Opaque ticket number.
    pub number: String,
    /// Lot that issued the ticket.
    pub lot_id: String,
    /// When the vehicle entered.
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(number: impl Into<String>, lot_id: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            lot_id: lot_id.into(),
            issued_at: Utc::now(),
        }
    }

    /// Ticket presented by number only, e.g. typed in by a customer.
    pub fn from_number(number: impl Into<String>) -> Self {
        Self::new(number, String::new())
    }

    pub fn with_issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = issued_at;
        self
    }

    /// Time parked as of `now`, clamped to zero.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.issued_at).max(Duration::zero())
    }
}
