//! Parking lots.
//!
//! A [`ParkingLot`] owns a bounded set of occupied spaces keyed by ticket
//! number. It enforces capacity and one-space-per-vehicle, makes every ticket
//! single use, notifies its observers after each successful park or unpark,
//! and delegates fee math to its current [`FeeStrategy`](crate::fee::FeeStrategy).

mod error;
mod parking;
mod types;

pub use error::{LotError, TicketRejection};
pub use parking::ParkingLot;
pub use types::Receipt;
